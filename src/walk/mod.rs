//! Recursive directory walker
//!
//! Enumerates a directory tree, classifying every entry (file, directory,
//! symbolic link) from its own type bits, applying admission predicates that
//! shape the output without ever pruning recursion, and producing the same
//! ordered result whether run sequentially or with concurrent fan-out.

mod engine;
mod entry;
mod filter;

pub use engine::{walk, walk_concurrent, WalkOutput};
pub use entry::FsEntry;
pub use filter::{WalkConfig, WalkFilter, WalkPattern};
