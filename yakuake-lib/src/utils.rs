use log::debug;
use std::path::PathBuf;

/// Resolve `program` the way the shell would: names containing a slash are
/// taken as paths, everything else is looked up in `PATH`
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    match which::which(program) {
        Ok(path) => {
            debug!("Resolved {} to {}", program, path.display());
            Some(path)
        }
        Err(e) => {
            debug!("{} not found in PATH: {}", program, e);
            None
        }
    }
}

/// The numerically highest id in a `sessionIdList` reply such as `0,3,1`
pub fn latest_session_id(session_ids: &str) -> Option<u32> {
    session_ids
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|id| id.trim().parse::<u32>().ok())
        .max()
}

/// Parse a boolean property reply; anything else is treated as unknown
pub fn parse_visibility(reply: &str) -> Option<bool> {
    match reply.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
