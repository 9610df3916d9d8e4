use crate::errors::{AppError, AppResult};
use crate::utils::path::ensure_parent_dir;
use std::path::Path;

/// Refuse to clobber an existing file unless --force was given.
pub(crate) fn prepare_destination(path: &str, force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "File '{}' already exists. Use --force to overwrite.",
            path
        )));
    }

    ensure_parent_dir(path)?;
    Ok(())
}
