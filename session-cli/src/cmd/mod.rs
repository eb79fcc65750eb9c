pub mod open_session;

pub use open_session::cmd_open_session;
