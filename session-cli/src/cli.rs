use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "yakuake-session")]
#[command(about = "Open a new Yakuake session, optionally running a command in it")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Start the session in the home directory
    #[arg(short = 'h', long, overrides_with = "workdir")]
    pub homedir: bool,

    /// Working directory of the new session (defaults to the current directory)
    #[arg(short, long, value_name = "DIR", overrides_with = "homedir")]
    pub workdir: Option<String>,

    /// Keep the session open after the command finishes
    #[arg(long, visible_alias = "noclose")]
    pub hold: bool,

    /// Profile property to apply inside the session; may be repeated
    #[arg(short = 'p', value_name = "KEY=VALUE", value_parser = parse_profile_property)]
    pub profile: Vec<String>,

    /// Run CMD with ARGS inside the new session
    #[arg(short = 'e')]
    pub execute: bool,

    /// Do not show the Yakuake window
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Title of the new tab
    #[arg(short = 't', value_name = "TITLE")]
    pub title: Option<String>,

    /// Command to run followed by its arguments
    #[arg(
        value_name = "CMD [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        requires = "execute"
    )]
    pub command: Vec<String>,
}

fn parse_profile_property(value: &str) -> Result<String, String> {
    match value.split_once('=') {
        Some((key, _)) if !key.trim().is_empty() => Ok(value.to_string()),
        _ => Err(format!("expected KEY=VALUE, got '{}'", value)),
    }
}
