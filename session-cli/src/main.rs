use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use yakuake_session::app::App;
use yakuake_session::cli::Cli;
use yakuake_session::cmd::cmd_open_session;
use yakuake_session::config::Config;
use yakuake_session::error::{SessionError, exit_code};
use yakuake_session::request::InvocationRequest;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Warnings are part of the normal output; RUST_LOG raises verbosity
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing useful to do if stdout/stderr is already gone
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(SessionError::Usage(String::new()).exit_code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    debug!("Parsed CLI arguments: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("yakuake-session: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    let request = InvocationRequest::from_cli(cli)?;
    request.validate()?;
    let config = Config::load()?;
    let app = App::new(config);

    info!("Opening a new Yakuake session");
    cmd_open_session(&app, &request)?;
    Ok(())
}
