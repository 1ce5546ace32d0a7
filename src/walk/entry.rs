//! Entry descriptors and per-directory listing
//!
//! One listing call per directory level, classifying each entry from its own
//! type bits (lstat semantics). Symbolic links are never followed here, which
//! is what keeps the walker out of link cycles.

use crate::error::{FskitError, Result};
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// One filesystem entry discovered during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Base name of the entry
    pub name: String,
    /// Path relative to the walk root, parent prefix joined with `name`
    pub relative_path: PathBuf,
    /// Absolute path (canonicalized root joined downward, links untouched)
    pub path: PathBuf,
    /// True only for a real (non-symlink) directory
    pub is_dir: bool,
    /// True only for a real (non-symlink) regular file
    pub is_file: bool,
    /// True for any symbolic link, regardless of its target's type
    pub is_symlink: bool,
}

impl FsEntry {
    /// Build a descriptor from a directory entry's own type bits.
    ///
    /// A symlink is always reported as neither file nor directory; special
    /// entries (FIFOs, sockets, devices) come out with all three flags false
    /// and are treated as leaves.
    pub(crate) fn from_type_bits(
        name: String,
        file_type: FileType,
        parent_abs: &Path,
        parent_rel: &Path,
    ) -> Self {
        let is_symlink = file_type.is_symlink();
        FsEntry {
            relative_path: parent_rel.join(&name),
            path: parent_abs.join(&name),
            is_dir: !is_symlink && file_type.is_dir(),
            is_file: !is_symlink && file_type.is_file(),
            is_symlink,
            name,
        }
    }
}

/// List the immediate entries of `dir`, one descriptor per entry.
///
/// Fails with `NotFound`, `NotADirectory`, or `PermissionDenied` carrying
/// `dir` itself; entries appear in filesystem listing order.
pub(crate) fn list_level(dir: &Path, prefix: &Path) -> Result<Vec<FsEntry>> {
    let read = std::fs::read_dir(dir).map_err(|e| FskitError::classify_io(dir, e))?;

    let mut entries = Vec::new();
    for item in read {
        let item = item.map_err(|e| FskitError::classify_io(dir, e))?;
        let file_type = item
            .file_type()
            .map_err(|e| FskitError::classify_io(item.path(), e))?;
        let name = item.file_name().to_string_lossy().into_owned();
        entries.push(FsEntry::from_type_bits(name, file_type, dir, prefix));
    }
    Ok(entries)
}

/// Async variant of [`list_level`] with identical classification and order.
pub(crate) async fn list_level_async(dir: &Path, prefix: &Path) -> Result<Vec<FsEntry>> {
    let mut read = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| FskitError::classify_io(dir, e))?;

    let mut entries = Vec::new();
    while let Some(item) = read
        .next_entry()
        .await
        .map_err(|e| FskitError::classify_io(dir, e))?
    {
        let file_type = item
            .file_type()
            .await
            .map_err(|e| FskitError::classify_io(item.path(), e))?;
        let name = item.file_name().to_string_lossy().into_owned();
        entries.push(FsEntry::from_type_bits(name, file_type, dir, prefix));
    }
    Ok(entries)
}
