pub mod mock_executor;
pub mod yakuake_executor;

use crate::commands::call::RemoteCall;
use crate::commands::launch::LaunchCommand;
use crate::commands::list_services::ListServicesCommand;
use crate::types::{IpcEndpoint, IpcTechnology, RemoteCallResult};
use anyhow::Result;
use std::path::PathBuf;

/// Everything the session logic needs from the outside world.
///
/// `Err` means the tool could not be run at all; a tool that ran and failed
/// comes back as an unsuccessful `RemoteCallResult`.
pub trait CommandExecutor {
    fn endpoint(&self, technology: IpcTechnology) -> &IpcEndpoint;
    fn find_program(&self, program: &str) -> Option<PathBuf>;
    fn list_services(&self, command: ListServicesCommand) -> Result<RemoteCallResult>;
    fn call(&self, command: RemoteCall) -> Result<RemoteCallResult>;
    fn launch(&self, command: LaunchCommand) -> Result<()>;
}

pub use mock_executor::MockExecutor;
pub use yakuake_executor::YakuakeExecutor;
