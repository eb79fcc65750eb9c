use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::shell_quote;

pub const SCRIPT_PREFIX: &str = "yakuake-session.";

/// Shell expression the new session runs after changing directory.
///
/// Without `hold` the command replaces the session's shell, so the tab closes
/// when it exits. Arguments are passed through unquoted for the shell to split.
pub fn command_expression(command: Option<&str>, args: &[String], hold: bool) -> String {
    let Some(command) = command else {
        return "true".to_string();
    };

    let mut expression = shell_quote(command);
    if !args.is_empty() {
        expression.push(' ');
        expression.push_str(&args.join(" "));
    }

    if hold {
        expression
    } else {
        format!("exec {}", expression)
    }
}

/// Snippet sourced once by the new session; it removes itself afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct SetupScript {
    pub profile_line: String,
    pub workdir: PathBuf,
    pub command: String,
}

impl SetupScript {
    pub fn new(profile_line: String, workdir: PathBuf, command: String) -> Self {
        Self {
            profile_line,
            workdir,
            command,
        }
    }

    pub fn render(&self, script_path: &Path) -> String {
        format!(
            "clear\n{} && cd {} && {}\nrm -f {}\n",
            self.profile_line,
            shell_quote(&self.workdir.to_string_lossy()),
            self.command,
            shell_quote(&script_path.to_string_lossy()),
        )
    }

    /// Write to a fresh uniquely named file in `dir` (or the system temp
    /// dir). The file is left behind for the session to source.
    pub fn write(&self, dir: Option<&Path>) -> Result<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRIPT_PREFIX).rand_bytes(8);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("Failed to create session setup script")?;

        let content = self.render(file.path());
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let (_, path) = file
            .keep()
            .context("Failed to keep session setup script")?;
        debug!("Wrote setup script {}:\n{}", path.display(), content);
        Ok(path)
    }
}

/// Line typed into the session; the leading space keeps it out of history
pub fn source_line(script_path: &Path) -> String {
    format!(" . {}", shell_quote(&script_path.to_string_lossy()))
}
