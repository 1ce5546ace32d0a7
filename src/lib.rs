//! # fskit - Filesystem Utilities
//!
//! Filesystem utilities beyond basic read/write: a deterministic recursive
//! directory walker, automatic text-encoding and line-ending detection, and
//! normalizing text writes.
//!
//! ## Features
//!
//! - **Recursive Walker**: classifies every entry (file, directory, symbolic
//!   link) from its own type bits; symlinks are always leaves and never
//!   expanded, so the walker cannot enter a link cycle
//! - **Deterministic Concurrency**: the sequential and the concurrent walker
//!   produce identical ordered results for the same tree and configuration
//! - **Admission Filters**: case-insensitive match/ignore patterns and type
//!   filters shape the output without ever pruning recursion
//! - **Encoding-Aware Text I/O**: BOM and UTF-8 sniffing, UTF-16 and
//!   Windows-1252 decoding, line-ending normalization on write
//! - **Small Ops**: unique temp-path generation, symlink creation
//!
//! ## Quick Start
//!
//! ```no_run
//! use fskit::{walk, WalkConfig};
//!
//! // Every relative path under /data, symlinks included as leaves
//! let output = walk("/data", &WalkConfig::default()).unwrap();
//! for path in output.into_paths().unwrap() {
//!     println!("{path}");
//! }
//! ```
//!
//! ## Filtered, Concurrent Walk
//!
//! ```no_run
//! use fskit::{walk_concurrent, WalkConfig};
//!
//! # async fn demo() -> fskit::Result<()> {
//! let config = WalkConfig {
//!     match_pattern: Some(r"\.txt$".into()),
//!     include_entries: true,
//!     ..Default::default()
//! };
//!
//! // Same ordered result as fskit::walk, with per-directory fan-out
//! let entries = walk_concurrent("/data", &config).await?.into_entries().unwrap();
//! for entry in &entries {
//!     println!("{} (symlink: {})", entry.relative_path.display(), entry.is_symlink);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Text Normalization on Write
//!
//! ```no_run
//! use fskit::text::{read_text, write_text, LineEnding, WriteOptions};
//!
//! let doc = read_text("notes.txt").unwrap();
//! let options = WriteOptions {
//!     line_ending: Some(LineEnding::Lf),
//!     trim_trailing: true,
//!     ..Default::default()
//! };
//! write_text("notes.txt", &doc.content, &options).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ops;
pub mod text;
pub mod walk;

// Re-export commonly used types
pub use error::{FskitError, Result};
pub use walk::{walk, walk_concurrent, FsEntry, WalkConfig, WalkOutput, WalkPattern};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use fskit::prelude::*;
    //! ```

    pub use crate::error::{FskitError, Result};
    pub use crate::ops::{create_symlink, temp_path};
    pub use crate::text::{
        read_text, write_text, LineEnding, TextDocument, TextEncoding, WriteOptions,
    };
    pub use crate::walk::{walk, walk_concurrent, FsEntry, WalkConfig, WalkOutput, WalkPattern};
}
