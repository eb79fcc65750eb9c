use crate::commands::call::RemoteCall;
use crate::types::IpcTechnology;

pub const DBUS_SESSIONS_OBJECT: &str = "/yakuake/sessions";
pub const DBUS_TABS_OBJECT: &str = "/yakuake/tabs";
pub const DCOP_INTERFACE_OBJECT: &str = "DCOPInterface";

impl RemoteCall {
    /// Open a new session (tab)
    pub fn add_session(technology: IpcTechnology) -> Self {
        match technology {
            IpcTechnology::DBus => Self::new(technology, DBUS_SESSIONS_OBJECT, "addSession"),
            IpcTechnology::Dcop => Self::new(technology, DCOP_INTERFACE_OBJECT, "slotAddSession"),
        }
    }

    /// Type `text` into the most recently created session
    pub fn run_command(technology: IpcTechnology, text: &str) -> Self {
        match technology {
            IpcTechnology::DBus => {
                Self::new(technology, DBUS_SESSIONS_OBJECT, "runCommand").arg(text)
            }
            IpcTechnology::Dcop => {
                Self::new(technology, DCOP_INTERFACE_OBJECT, "slotRunCommandInSession").arg(text)
            }
        }
    }

    /// Comma separated ids of every open session. D-Bus only.
    pub fn session_id_list() -> Self {
        Self::new(IpcTechnology::DBus, DBUS_SESSIONS_OBJECT, "sessionIdList")
    }

    /// D-Bus only; DCOP has no equivalent
    pub fn set_tab_title(session_id: u32, title: &str) -> Self {
        Self::new(IpcTechnology::DBus, DBUS_TABS_OBJECT, "setTabTitle")
            .arg(session_id.to_string())
            .arg(title)
    }
}
