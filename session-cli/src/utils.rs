use std::path::{Path, PathBuf};

/// Single-quote `value` for a POSIX shell
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Expand a leading `~` and resolve relative paths against `base`
pub fn resolve_path(path: &str, base: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

pub fn home_dir() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~").into_owned())
}
