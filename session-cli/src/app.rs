use crate::config::Config;
use yakuake_lib::{CommandExecutor, YakuakeExecutor};

pub struct App<E: CommandExecutor> {
    pub config: Config,
    pub executor: E,
}

impl App<YakuakeExecutor> {
    pub fn new(config: Config) -> Self {
        let executor = YakuakeExecutor::with_endpoints(config.endpoints());
        Self { config, executor }
    }
}

impl<E: CommandExecutor> App<E> {
    pub fn with_executor(config: Config, executor: E) -> Self {
        Self { config, executor }
    }
}
