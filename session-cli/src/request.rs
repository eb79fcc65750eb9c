use anyhow::Result;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::SessionError;
use crate::profile::ProfileSettings;
use crate::utils::{home_dir, resolve_path};

/// Normalized form of the command line
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub workdir: PathBuf,
    pub hold: bool,
    pub profile: ProfileSettings,
    pub command: Option<String>,
    pub command_args: Vec<String>,
    pub title: Option<String>,
    pub show_window: bool,
}

impl InvocationRequest {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cwd = env::current_dir()?;
        Self::from_cli_in(cli, &cwd)
    }

    /// Like `from_cli`, resolving relative paths against `cwd`
    pub fn from_cli_in(cli: Cli, cwd: &Path) -> Result<Self> {
        let workdir = if cli.homedir {
            home_dir()
        } else if let Some(workdir) = &cli.workdir {
            resolve_path(workdir, cwd)
        } else {
            cwd.to_path_buf()
        };

        let mut positionals = cli.command.into_iter();
        let command = positionals.next();
        if cli.execute && command.is_none() {
            return Err(SessionError::Usage("-e requires a command to run".to_string()).into());
        }

        let request = Self {
            workdir,
            hold: cli.hold,
            profile: cli.profile.into_iter().collect(),
            command,
            command_args: positionals.collect(),
            title: cli.title,
            show_window: !cli.quiet,
        };
        debug!("Normalized request: {:?}", request);
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.workdir.is_dir() {
            return Err(SessionError::WorkdirMissing(self.workdir.clone()));
        }
        Ok(())
    }
}
