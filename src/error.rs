//! Error types for fskit
//!
//! All fallible operations in this crate return [`Result`]. Walker errors
//! carry the offending path so callers can tell which directory or pattern
//! caused a failure.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fskit operations
#[derive(Error, Debug)]
pub enum FskitError {
    /// Path does not exist (root or a subdirectory vanished mid-walk)
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Access refused by the operating system
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Malformed match/ignore pattern, raised before any filesystem access
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A concurrent walker task failed to join
    #[error("Walker task failed: {0}")]
    Task(String),

    /// Symbolic link creation error
    #[error("Symbolic link error at '{path}': {message}")]
    Symlink { path: PathBuf, message: String },

    /// Text encoding/decoding error
    #[error("Encoding error at '{path}': {message}")]
    Encoding { path: PathBuf, message: String },
}

impl FskitError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify an I/O error raised while accessing `path`.
    ///
    /// Maps the error kinds the walker distinguishes (`NotFound`,
    /// `NotADirectory`, `PermissionDenied`) to their typed variants; anything
    /// else stays a generic [`FskitError::Io`].
    pub fn classify_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound(path),
            ErrorKind::NotADirectory => Self::NotADirectory(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source },
        }
    }

    /// Check if this error is a permission issue
    pub fn is_permission_error(&self) -> bool {
        match self {
            Self::PermissionDenied(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(path)
            | Self::NotADirectory(path)
            | Self::PermissionDenied(path)
            | Self::Io { path, .. }
            | Self::Symlink { path, .. }
            | Self::Encoding { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for fskit operations
pub type Result<T> = std::result::Result<T, FskitError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| FskitError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FskitError::io("/test/path", io_err);
        assert_eq!(err.path().unwrap(), &PathBuf::from("/test/path"));
    }

    #[test]
    fn test_classify_io_kinds() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            FskitError::classify_io("/a", not_found),
            FskitError::NotFound(_)
        ));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        let err = FskitError::classify_io("/b", denied);
        assert!(matches!(err, FskitError::PermissionDenied(_)));
        assert!(err.is_permission_error());

        let other = std::io::Error::new(std::io::ErrorKind::Interrupted, "eintr");
        assert!(matches!(
            FskitError::classify_io("/c", other),
            FskitError::Io { .. }
        ));
    }
}
