//! Path utilities: expand ~, ensure parent directories for output files.

use std::fs;
use std::io;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &str) -> io::Result<()> {
    if let Some(parent) = PathBuf::from(path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
