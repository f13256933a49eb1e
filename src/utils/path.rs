//! Path utilities: expand ~ in user-supplied paths.

use crate::errors::AppResult;
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a `--db` argument: expand `~`, then anchor relative paths at the
/// current directory. Every command, `init` included, sees the same file.
pub fn resolve_db_path(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}
