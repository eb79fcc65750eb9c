pub mod call;
pub mod launch;
pub mod list_services;
pub mod sessions;
pub mod window;
