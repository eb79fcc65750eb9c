pub mod commands;
pub mod executor;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use commands::call::RemoteCall;
pub use commands::launch::LaunchCommand;
pub use commands::list_services::ListServicesCommand;
pub use commands::window::QtWidgetInterface;
pub use executor::{CommandExecutor, MockExecutor, YakuakeExecutor};
pub use types::{IpcEndpoint, IpcEndpoints, IpcTechnology, RemoteCallResult};
