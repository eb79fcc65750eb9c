mod types;

pub use types::{ApplicationConfig, ConfigData, EndpointConfig, ProfileToolConfig, ScriptConfig};

use anyhow::Result;
use log::{debug, error, info};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use yakuake_lib::{IpcEndpoint, IpcEndpoints, IpcTechnology};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "YAKUAKE_SESSION_CONFIG";

pub const DEFAULT_PROGRAM: &str = "yakuake";
pub const DEFAULT_PROFILE_TOOL: &str = "konsoleprofile";
pub const DEFAULT_LAUNCH_SETTLE_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    program: String,
    launch_settle: Duration,
    endpoints: IpcEndpoints,
    profile_tool: String,
    script_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_config_data(ConfigData::default())
    }
}

impl Config {
    /// Load from `$YAKUAKE_SESSION_CONFIG`, else the default location
    pub fn load() -> Result<Self> {
        let explicit = env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|path| !path.is_empty())
            .map(|path| PathBuf::from(shellexpand::tilde(&path).into_owned()));
        Self::load_from_path(explicit)
    }

    /// An explicit path must exist; a missing default file means defaults
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let (config_path, explicit) = match config_path {
            Some(path) => (path, true),
            None => (get_config_path(), false),
        };

        if !explicit && !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        debug!("Loading config from: {:?}", config_path);

        let content = fs::read_to_string(&config_path).map_err(|e| {
            error!("Failed to read config file {:?}: {}", config_path, e);
            e
        })?;

        let data: ConfigData = toml::from_str(&content).map_err(|e| {
            error!("Failed to parse config TOML: {}", e);
            e
        })?;

        let config = Self::from_config_data(data);
        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn from_config_data(data: ConfigData) -> Self {
        let application = data.application.unwrap_or_default();
        let program = application
            .program
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let launch_settle = Duration::from_millis(
            application
                .launch_settle_ms
                .unwrap_or(DEFAULT_LAUNCH_SETTLE_MS),
        );

        let endpoints = IpcEndpoints {
            dbus: resolve_endpoint(data.dbus, IpcTechnology::DBus),
            dcop: resolve_endpoint(data.dcop, IpcTechnology::Dcop),
        };

        let profile_tool = data
            .profile
            .and_then(|p| p.tool)
            .unwrap_or_else(|| DEFAULT_PROFILE_TOOL.to_string());

        let script_dir = data
            .script
            .and_then(|s| s.dir)
            .map(|dir| PathBuf::from(shellexpand::tilde(&dir).into_owned()));

        Config {
            program,
            launch_settle,
            endpoints,
            profile_tool,
            script_dir,
        }
    }

    pub fn application_program(&self) -> &str {
        &self.program
    }

    pub fn launch_settle(&self) -> Duration {
        self.launch_settle
    }

    pub fn endpoints(&self) -> IpcEndpoints {
        self.endpoints.clone()
    }

    pub fn profile_tool(&self) -> &str {
        &self.profile_tool
    }

    pub fn script_dir(&self) -> Option<&PathBuf> {
        self.script_dir.as_ref()
    }
}

fn resolve_endpoint(config: Option<EndpointConfig>, technology: IpcTechnology) -> IpcEndpoint {
    let default = IpcEndpoint::default_for(technology);
    let config = config.unwrap_or_default();
    IpcEndpoint {
        tool: config.tool.unwrap_or(default.tool),
        service: config.service.unwrap_or(default.service),
    }
}

fn get_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.config/yakuake-session/config.toml").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.application_program(), "yakuake");
        assert_eq!(config.launch_settle(), Duration::from_millis(1500));
        assert_eq!(config.endpoints(), IpcEndpoints::default());
        assert_eq!(config.profile_tool(), "konsoleprofile");
        assert!(config.script_dir().is_none());
    }

    #[test]
    fn test_load_full_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.child("config.toml");
        config_file.write_str(
            r#"[application]
program = "/opt/kde/bin/yakuake"
launch_settle_ms = 0

[dbus]
tool = "qdbus-qt5"

[dcop]
service = "yakuake-legacy"

[profile]
tool = "konsoleprofile5"

[script]
dir = "/var/tmp"
"#,
        )?;

        let config = Config::load_from_path(Some(config_file.path().to_path_buf()))?;

        assert_eq!(config.application_program(), "/opt/kde/bin/yakuake");
        assert_eq!(config.launch_settle(), Duration::ZERO);
        let endpoints = config.endpoints();
        assert_eq!(endpoints.dbus, IpcEndpoint::new("qdbus-qt5", "org.kde.yakuake"));
        assert_eq!(endpoints.dcop, IpcEndpoint::new("dcop", "yakuake-legacy"));
        assert_eq!(config.profile_tool(), "konsoleprofile5");
        assert_eq!(config.script_dir(), Some(&PathBuf::from("/var/tmp")));
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.child("config.toml");
        config_file.write_str("[application]\nlaunch_settle_ms = 250\n")?;

        let config = Config::load_from_path(Some(config_file.path().to_path_buf()))?;

        assert_eq!(config.application_program(), "yakuake");
        assert_eq!(config.launch_settle(), Duration::from_millis(250));
        assert_eq!(config.endpoints(), IpcEndpoints::default());
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(Config::load_from_path(Some(missing)).is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_file = temp_dir.child("config.toml");
        config_file.write_str("[application]\nprogramme = \"yakuake\"\n")?;

        assert!(Config::load_from_path(Some(config_file.path().to_path_buf())).is_err());
        Ok(())
    }
}
