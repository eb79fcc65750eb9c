use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::commands::call::RemoteCall;
use crate::commands::launch::LaunchCommand;
use crate::commands::list_services::ListServicesCommand;
use crate::executor::CommandExecutor;
use crate::types::{IpcEndpoint, IpcEndpoints, IpcTechnology, RemoteCallResult};
use crate::utils::find_in_path;

/// Talks to Yakuake by running `qdbus` / `dcop` as child processes
pub struct YakuakeExecutor {
    endpoints: IpcEndpoints,
}

impl YakuakeExecutor {
    pub fn new() -> Self {
        Self::with_endpoints(IpcEndpoints::default())
    }

    pub fn with_endpoints(endpoints: IpcEndpoints) -> Self {
        Self { endpoints }
    }

    fn run_tool(&self, tool: &str, args: &[String]) -> Result<RemoteCallResult> {
        debug!("Running {} {}", tool, args.join(" "));

        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", tool))?;

        let result = RemoteCallResult::from_output(&output);
        if !result.is_success() {
            debug!(
                "{} failed: {}",
                tool,
                result.error_message.as_deref().unwrap_or_default()
            );
        }
        Ok(result)
    }
}

impl Default for YakuakeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for YakuakeExecutor {
    fn endpoint(&self, technology: IpcTechnology) -> &IpcEndpoint {
        self.endpoints.get(technology)
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        find_in_path(program)
    }

    fn list_services(&self, command: ListServicesCommand) -> Result<RemoteCallResult> {
        let endpoint = self.endpoint(command.technology);
        self.run_tool(&endpoint.tool, &[])
    }

    fn call(&self, command: RemoteCall) -> Result<RemoteCallResult> {
        let endpoint = self.endpoint(command.technology);
        let mut args = vec![endpoint.service.clone()];
        args.extend(command.tool_args());
        self.run_tool(&endpoint.tool, &args)
    }

    fn launch(&self, command: LaunchCommand) -> Result<()> {
        debug!("Launching {} in the background", command.program);

        // Not waited on: the application outlives this process
        Command::new(&command.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start {}", command.program))?;
        Ok(())
    }
}
