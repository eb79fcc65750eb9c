use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;
use yakuake_lib::CommandExecutor;

use crate::app::App;
use crate::error::SessionError;
use crate::request::InvocationRequest;
use crate::script::{SetupScript, command_expression, source_line};
use crate::yakuake::Yakuake;

/// Open a new Yakuake session configured by `request`.
///
/// Returns the path of the setup script handed to the session.
pub fn cmd_open_session<E: CommandExecutor>(
    app: &App<E>,
    request: &InvocationRequest,
) -> Result<PathBuf> {
    request.validate()?;

    if let Some(command) = &request.command {
        if app.executor.find_program(command).is_none() {
            return Err(SessionError::CommandNotFound(command.clone()).into());
        }
    }
    let command = command_expression(
        request.command.as_deref(),
        &request.command_args,
        request.hold,
    );

    let yakuake = Yakuake::connect(&app.executor, &app.config)?;

    yakuake
        .add_session()
        .map_err(|e| SessionError::AddSessionFailed(format!("{:#}", e)))?;

    if let Some(title) = &request.title {
        if let Err(e) = yakuake.set_title(title) {
            warn!("Cannot set the tab title: {:#}", e);
        }
    }

    let profile_tool = app.config.profile_tool();
    let profile_line = if request.profile.is_empty() {
        request.profile.setup_line(None)
    } else if app.executor.find_program(profile_tool).is_some() {
        request.profile.setup_line(Some(profile_tool))
    } else {
        warn!(
            "{} is not installed, ignoring profile properties",
            profile_tool
        );
        request.profile.setup_line(None)
    };

    let script = SetupScript::new(profile_line, request.workdir.clone(), command);
    let script_path = script.write(app.config.script_dir().map(PathBuf::as_path))?;

    yakuake
        .run_command(&source_line(&script_path))
        .map_err(|e| SessionError::RunCommandFailed(format!("{:#}", e)))?;

    if request.show_window {
        if let Err(e) = yakuake.show_window() {
            warn!("Cannot show the Yakuake window: {:#}", e);
        }
    }

    info!(
        "Opened session in {} over {}",
        request.workdir.display(),
        yakuake.technology()
    );
    Ok(script_path)
}
