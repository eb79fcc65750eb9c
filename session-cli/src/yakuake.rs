use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use std::thread;
use yakuake_lib::utils::{latest_session_id, parse_visibility};
use yakuake_lib::{
    CommandExecutor, IpcTechnology, LaunchCommand, ListServicesCommand, QtWidgetInterface,
    RemoteCall,
};

use crate::config::Config;
use crate::error::SessionError;

/// Handle on a running Yakuake, bound to one IPC technology for its lifetime
pub struct Yakuake<'a, E: CommandExecutor> {
    executor: &'a E,
    technology: IpcTechnology,
}

impl<'a, E: CommandExecutor> Yakuake<'a, E> {
    pub fn with_technology(executor: &'a E, technology: IpcTechnology) -> Self {
        Self {
            executor,
            technology,
        }
    }

    /// Find a way to talk to Yakuake, starting it once if nothing answers
    pub fn connect(executor: &'a E, config: &Config) -> Result<Self> {
        if let Some(technology) = Self::probe(executor) {
            return Ok(Self::with_technology(executor, technology));
        }

        let program = config.application_program();
        if executor.find_program(program).is_none() {
            error!("{} was not found in PATH", program);
            return Err(SessionError::NotInstalled(program.to_string()).into());
        }

        info!("Yakuake is not reachable, launching {}", program);
        executor
            .launch(LaunchCommand::new(program))
            .map_err(|e| SessionError::LaunchFailed {
                program: program.to_string(),
                reason: format!("{:#}", e),
            })?;

        let settle = config.launch_settle();
        if !settle.is_zero() {
            debug!("Waiting {:?} for Yakuake to register", settle);
            thread::sleep(settle);
        }

        match Self::probe(executor) {
            Some(technology) => Ok(Self::with_technology(executor, technology)),
            None => Err(SessionError::NoIpc.into()),
        }
    }

    fn probe(executor: &E) -> Option<IpcTechnology> {
        let found = IpcTechnology::RANKED
            .into_iter()
            .find(|technology| Self::is_reachable(executor, *technology));
        match found {
            Some(technology) => info!("Yakuake reachable over {}", technology),
            None => debug!("Yakuake is not reachable over any IPC technology"),
        }
        found
    }

    fn is_reachable(executor: &E, technology: IpcTechnology) -> bool {
        let endpoint = executor.endpoint(technology);
        if executor.find_program(&endpoint.tool).is_none() {
            debug!("{} control tool {} not installed", technology, endpoint.tool);
            return false;
        }

        match executor.list_services(ListServicesCommand::new(technology)) {
            Ok(result) if result.is_success() => result
                .output
                .lines()
                .any(|line| line.trim() == endpoint.service),
            Ok(result) => {
                debug!(
                    "{} listing failed: {}",
                    technology,
                    result.error_message.unwrap_or_default()
                );
                false
            }
            Err(e) => {
                debug!("{} listing could not run: {:#}", technology, e);
                false
            }
        }
    }

    pub fn technology(&self) -> IpcTechnology {
        self.technology
    }

    fn call(&self, call: RemoteCall) -> Result<String> {
        let method = call.method.clone();
        let result = self.executor.call(call)?;
        if !result.is_success() {
            let error_msg = result
                .error_message
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(anyhow!("{} failed: {}", method, error_msg));
        }
        Ok(result.output)
    }

    pub fn add_session(&self) -> Result<()> {
        self.call(RemoteCall::add_session(self.technology))?;
        info!("Added a new session");
        Ok(())
    }

    pub fn run_command(&self, text: &str) -> Result<()> {
        self.call(RemoteCall::run_command(self.technology, text))?;
        debug!("Sent command to session: {:?}", text);
        Ok(())
    }

    /// Title the most recently created session.
    ///
    /// The newest session is taken to be the one with the highest id, which
    /// can pick the wrong tab when several invocations race.
    pub fn set_title(&self, title: &str) -> Result<()> {
        match self.technology {
            IpcTechnology::DBus => {
                let session_ids = self.call(RemoteCall::session_id_list())?;
                let session_id = latest_session_id(&session_ids)
                    .ok_or_else(|| anyhow!("Yakuake reported no sessions: {:?}", session_ids))?;
                self.call(RemoteCall::set_tab_title(session_id, title))?;
                info!("Set title of session {} to '{}'", session_id, title);
            }
            IpcTechnology::Dcop => {
                warn!("Setting the tab title is not supported over DCOP");
            }
        }
        Ok(())
    }

    /// Raise the window if it is hidden; leave it alone when unsure
    pub fn show_window(&self) -> Result<()> {
        match self.window_visible() {
            Some(true) => debug!("Yakuake window already visible"),
            Some(false) => {
                self.call(RemoteCall::toggle_window(self.technology))?;
                info!("Toggled the Yakuake window");
            }
            None => warn!("Cannot determine whether the Yakuake window is visible"),
        }
        Ok(())
    }

    fn window_visible(&self) -> Option<bool> {
        let queries: Vec<RemoteCall> = match self.technology {
            IpcTechnology::DBus => QtWidgetInterface::ALL
                .into_iter()
                .map(RemoteCall::window_visible_dbus)
                .collect(),
            IpcTechnology::Dcop => vec![RemoteCall::window_visible_dcop()],
        };

        // The first query that runs decides; a failing one falls through
        for query in queries {
            match self.call(query) {
                Ok(reply) => return parse_visibility(&reply),
                Err(e) => debug!("Visibility query failed: {:#}", e),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yakuake_lib::{MockExecutor, RemoteCallResult};

    fn quick_config() -> Config {
        let mut data = crate::config::ConfigData::default();
        data.application = Some(crate::config::ApplicationConfig {
            program: None,
            launch_settle_ms: Some(0),
        });
        Config::from_config_data(data)
    }

    #[test]
    fn test_connect_prefers_dbus() -> Result<()> {
        let mock = MockExecutor::with_programs(&["qdbus", "dcop"]);
        mock.expect_list_services_response(Ok(RemoteCallResult::success(
            ":1.4\n org.kde.yakuake\n org.kde.konsole",
        )));

        let yakuake = Yakuake::connect(&mock, &quick_config())?;

        assert_eq!(yakuake.technology(), IpcTechnology::DBus);
        assert_eq!(mock.list_services_call_count(), 1);
        assert_eq!(mock.launch_call_count(), 0);
        Ok(())
    }

    #[test]
    fn test_connect_falls_back_to_dcop() -> Result<()> {
        let mock = MockExecutor::with_programs(&["qdbus", "dcop"]);
        mock.expect_list_services_response(Ok(RemoteCallResult::success(" org.kde.kded5")));
        mock.expect_list_services_response(Ok(RemoteCallResult::success("kded\nyakuake\n")));

        let yakuake = Yakuake::connect(&mock, &quick_config())?;

        assert_eq!(yakuake.technology(), IpcTechnology::Dcop);
        let probed: Vec<IpcTechnology> = mock
            .list_services_calls
            .borrow()
            .iter()
            .map(|c| c.technology)
            .collect();
        assert_eq!(probed, vec![IpcTechnology::DBus, IpcTechnology::Dcop]);
        Ok(())
    }

    #[test]
    fn test_connect_skips_missing_control_tool() -> Result<()> {
        let mock = MockExecutor::with_programs(&["dcop"]);
        mock.expect_list_services_response(Ok(RemoteCallResult::success("yakuake")));

        let yakuake = Yakuake::connect(&mock, &quick_config())?;

        assert_eq!(yakuake.technology(), IpcTechnology::Dcop);
        assert_eq!(mock.list_services_call_count(), 1);
        Ok(())
    }

    #[test]
    fn test_connect_not_installed() {
        let mock = MockExecutor::with_programs(&["qdbus"]);

        let err = Yakuake::connect(&mock, &quick_config()).err().unwrap();

        assert_eq!(crate::error::exit_code(&err), 20);
        assert_eq!(mock.launch_call_count(), 0);
    }

    #[test]
    fn test_connect_launches_and_reprobes_once() -> Result<()> {
        let mock = MockExecutor::with_programs(&["qdbus", "yakuake"]);
        mock.expect_list_services_response(Ok(RemoteCallResult::success(":1.1")));
        mock.expect_list_services_response(Ok(RemoteCallResult::success(" org.kde.yakuake")));

        let yakuake = Yakuake::connect(&mock, &quick_config())?;

        assert_eq!(yakuake.technology(), IpcTechnology::DBus);
        assert_eq!(mock.get_launch_calls(), vec![LaunchCommand::new("yakuake")]);
        assert_eq!(mock.list_services_call_count(), 2);
        Ok(())
    }

    #[test]
    fn test_connect_launch_failure() {
        let mock = MockExecutor::with_programs(&["yakuake"]);
        mock.expect_launch_response(Err(anyhow!("permission denied")));

        let err = Yakuake::connect(&mock, &quick_config()).err().unwrap();

        assert_eq!(crate::error::exit_code(&err), 126);
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_connect_still_unreachable_after_launch() {
        let mock = MockExecutor::with_programs(&["qdbus", "dcop", "yakuake"]);

        let err = Yakuake::connect(&mock, &quick_config()).err().unwrap();

        assert_eq!(crate::error::exit_code(&err), 22);
        assert_eq!(mock.launch_call_count(), 1);
        assert_eq!(mock.list_services_call_count(), 4);
    }

    #[test]
    fn test_set_title_targets_highest_session_id() -> Result<()> {
        let mock = MockExecutor::new();
        mock.expect_call_response("sessionIdList", Ok(RemoteCallResult::success("0,11,2")));
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        yakuake.set_title("server")?;

        let calls = mock.calls_to("setTabTitle");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args, vec!["11", "server"]);
        Ok(())
    }

    #[test]
    fn test_set_title_without_sessions_fails() {
        let mock = MockExecutor::new();
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        assert!(yakuake.set_title("server").is_err());
        assert_eq!(mock.call_count("setTabTitle"), 0);
    }

    #[test]
    fn test_set_title_over_dcop_is_a_no_op() -> Result<()> {
        let mock = MockExecutor::new();
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::Dcop);

        yakuake.set_title("server")?;

        assert_eq!(mock.remote_call_count(), 0);
        Ok(())
    }

    #[test]
    fn test_add_session_failure() {
        let mock = MockExecutor::new();
        mock.expect_call_response("addSession", Ok(RemoteCallResult::error("no reply")));
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        let err = yakuake.add_session().unwrap_err();
        assert!(err.to_string().contains("no reply"));
    }

    #[test]
    fn test_show_window_toggles_hidden_window() -> Result<()> {
        let mock = MockExecutor::new();
        mock.expect_call_response(
            "org.qtproject.Qt.QWidget.visible",
            Ok(RemoteCallResult::success("false")),
        );
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        yakuake.show_window()?;

        assert_eq!(mock.call_count("toggleWindowState"), 1);
        assert_eq!(mock.call_count("com.trolltech.Qt.QWidget.visible"), 0);
        Ok(())
    }

    #[test]
    fn test_show_window_falls_back_to_older_qt_interface() -> Result<()> {
        let mock = MockExecutor::new();
        mock.expect_call_response(
            "org.qtproject.Qt.QWidget.visible",
            Ok(RemoteCallResult::error("No such property")),
        );
        mock.expect_call_response(
            "com.trolltech.Qt.QWidget.visible",
            Ok(RemoteCallResult::success("false")),
        );
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        yakuake.show_window()?;

        assert_eq!(mock.call_count("com.trolltech.Qt.QWidget.visible"), 1);
        assert_eq!(mock.call_count("toggleWindowState"), 1);
        Ok(())
    }

    #[test]
    fn test_show_window_leaves_visible_window_alone() -> Result<()> {
        let mock = MockExecutor::new();
        mock.expect_call_response("visible", Ok(RemoteCallResult::success("true")));
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::Dcop);

        yakuake.show_window()?;

        assert_eq!(mock.call_count("visible"), 1);
        assert_eq!(mock.call_count("slotToggleState"), 0);
        Ok(())
    }

    #[test]
    fn test_show_window_unknown_visibility_does_nothing() -> Result<()> {
        let mock = MockExecutor::new();
        mock.expect_call_response(
            "org.qtproject.Qt.QWidget.visible",
            Ok(RemoteCallResult::error("fail")),
        );
        mock.expect_call_response(
            "com.trolltech.Qt.QWidget.visible",
            Ok(RemoteCallResult::error("fail")),
        );
        let yakuake = Yakuake::with_technology(&mock, IpcTechnology::DBus);

        yakuake.show_window()?;

        assert_eq!(mock.call_count("toggleWindowState"), 0);
        Ok(())
    }
}
