use serde::Deserialize;

/// On-disk configuration; every section and key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigData {
    /// How to find and start Yakuake
    pub application: Option<ApplicationConfig>,
    /// D-Bus control tool and service name
    pub dbus: Option<EndpointConfig>,
    /// DCOP control tool and application name
    pub dcop: Option<EndpointConfig>,
    /// Tool that applies profile properties inside the session
    pub profile: Option<ProfileToolConfig>,
    /// Where setup scripts are written
    pub script: Option<ScriptConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationConfig {
    pub program: Option<String>,
    /// Milliseconds to wait after launching Yakuake before probing again
    pub launch_settle_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    pub tool: Option<String>,
    pub service: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileToolConfig {
    pub tool: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    pub dir: Option<String>,
}
