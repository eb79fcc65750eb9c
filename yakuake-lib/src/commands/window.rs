use crate::commands::call::RemoteCall;
use crate::commands::sessions::DCOP_INTERFACE_OBJECT;
use crate::types::IpcTechnology;

pub const DBUS_MAIN_WINDOW_OBJECT: &str = "/yakuake/MainWindow_1";
pub const DBUS_WINDOW_OBJECT: &str = "/yakuake/window";
pub const DCOP_MAIN_WINDOW_OBJECT: &str = "yakuake-mainwindow#1";

/// Qt exposes QWidget properties under a different interface name depending
/// on the Qt release Yakuake was built against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtWidgetInterface {
    QtProject,
    Trolltech,
}

impl QtWidgetInterface {
    /// Newest first
    pub const ALL: [QtWidgetInterface; 2] =
        [QtWidgetInterface::QtProject, QtWidgetInterface::Trolltech];

    pub fn visible_property(&self) -> &'static str {
        match self {
            QtWidgetInterface::QtProject => "org.qtproject.Qt.QWidget.visible",
            QtWidgetInterface::Trolltech => "com.trolltech.Qt.QWidget.visible",
        }
    }
}

impl RemoteCall {
    pub fn window_visible_dbus(interface: QtWidgetInterface) -> Self {
        Self::new(
            IpcTechnology::DBus,
            DBUS_MAIN_WINDOW_OBJECT,
            interface.visible_property(),
        )
    }

    pub fn window_visible_dcop() -> Self {
        Self::new(IpcTechnology::Dcop, DCOP_MAIN_WINDOW_OBJECT, "visible")
    }

    pub fn toggle_window(technology: IpcTechnology) -> Self {
        match technology {
            IpcTechnology::DBus => Self::new(technology, DBUS_WINDOW_OBJECT, "toggleWindowState"),
            IpcTechnology::Dcop => Self::new(technology, DCOP_INTERFACE_OBJECT, "slotToggleState"),
        }
    }
}
