use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that end the invocation with a dedicated exit status
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Usage(String),

    #[error("working directory does not exist: {}", .0.display())]
    WorkdirMissing(PathBuf),

    #[error("cannot create a new session: {0}")]
    AddSessionFailed(String),

    #[error("cannot run a command inside the new session: {0}")]
    RunCommandFailed(String),

    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("cannot connect to Yakuake")]
    NoIpc,

    #[error("cannot execute {program}: {reason}")]
    LaunchFailed { program: String, reason: String },

    #[error("command not found: {0}")]
    CommandNotFound(String),
}

impl SessionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::Usage(_) => 1,
            SessionError::WorkdirMissing(_) => 2,
            SessionError::AddSessionFailed(_) => 4,
            SessionError::RunCommandFailed(_) => 7,
            SessionError::NotInstalled(_) => 20,
            SessionError::NoIpc => 22,
            SessionError::LaunchFailed { .. } => 126,
            SessionError::CommandNotFound(_) => 127,
        }
    }
}

/// Exit status for any error reaching `main`; untyped errors count as internal
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<SessionError>()
        .map(SessionError::exit_code)
        .unwrap_or(1)
}
