pub mod app;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod profile;
pub mod request;
pub mod script;
pub mod utils;
pub mod yakuake;

// Re-export commonly used types and functions
pub use app::App;
pub use config::Config;
pub use error::SessionError;
pub use profile::ProfileSettings;
pub use request::InvocationRequest;
pub use utils::shell_quote;
