//! Small filesystem operations: temp paths and symlink creation

use crate::error::{FskitError, Result};
use std::path::{Path, PathBuf};

/// Create a unique, empty temp file and return its path.
///
/// The file lives in the system temp directory and is not deleted on drop;
/// creating it up front is what makes the path collision-free.
pub fn temp_path(prefix: &str, suffix: &str) -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile()
        .map_err(|e| FskitError::io(std::env::temp_dir(), e))?;

    file.into_temp_path()
        .keep()
        .map_err(|e| FskitError::io(std::env::temp_dir(), e.error))
}

/// Create a symbolic link at `link` pointing to `target`.
///
/// On Windows the link flavor (file vs directory) follows the target's
/// current metadata; a missing target gets a file link.
pub fn create_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    let target = target.as_ref();
    let link = link.as_ref();

    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let result = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };

    result.map_err(|e| FskitError::Symlink {
        path: link.to_path_buf(),
        message: e.to_string(),
    })
}
