use anyhow::Result;
use std::fmt;
use std::process::Output;

/// The two ways of reaching a running Yakuake, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpcTechnology {
    DBus,
    Dcop,
}

impl IpcTechnology {
    /// Probe order: D-Bus first, DCOP as the legacy fallback
    pub const RANKED: [IpcTechnology; 2] = [IpcTechnology::DBus, IpcTechnology::Dcop];

    pub fn name(&self) -> &'static str {
        match self {
            IpcTechnology::DBus => "D-Bus",
            IpcTechnology::Dcop => "DCOP",
        }
    }
}

impl fmt::Display for IpcTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control tool together with the service name Yakuake registers through it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpcEndpoint {
    pub tool: String,
    pub service: String,
}

impl IpcEndpoint {
    pub fn new(tool: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            service: service.into(),
        }
    }

    pub fn default_for(technology: IpcTechnology) -> Self {
        match technology {
            IpcTechnology::DBus => Self::new("qdbus", "org.kde.yakuake"),
            IpcTechnology::Dcop => Self::new("dcop", "yakuake"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpcEndpoints {
    pub dbus: IpcEndpoint,
    pub dcop: IpcEndpoint,
}

impl Default for IpcEndpoints {
    fn default() -> Self {
        Self {
            dbus: IpcEndpoint::default_for(IpcTechnology::DBus),
            dcop: IpcEndpoint::default_for(IpcTechnology::Dcop),
        }
    }
}

impl IpcEndpoints {
    pub fn get(&self, technology: IpcTechnology) -> &IpcEndpoint {
        match technology {
            IpcTechnology::DBus => &self.dbus,
            IpcTechnology::Dcop => &self.dcop,
        }
    }
}

/// Outcome of one control tool invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCallResult {
    pub success: bool,
    pub output: String,
    pub error_message: Option<String>,
}

impl RemoteCallResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error_message: None,
        }
    }

    pub fn success_empty() -> Self {
        Self::success(String::new())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error_message: Some(message.into()),
        }
    }

    pub fn from_output(output: &Output) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        if output.status.success() {
            return Self::success(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        Self {
            success: false,
            output: stdout,
            error_message: Some(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_result(self) -> Result<String> {
        if self.success {
            Ok(self.output)
        } else {
            let error_msg = self
                .error_message
                .unwrap_or_else(|| "Remote call failed".to_string());
            Err(anyhow::anyhow!(error_msg))
        }
    }
}
