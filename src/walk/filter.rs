//! Walk configuration and admission predicates
//!
//! A [`WalkFilter`] is compiled once per top-level walk from the caller's
//! [`WalkConfig`]. Its predicates decide only whether a descriptor appears in
//! the output; they never decide whether the walker descends into a
//! directory.

use crate::error::{FskitError, Result};
use crate::walk::entry::FsEntry;
use regex::{Regex, RegexBuilder};

/// A match/ignore pattern: precompiled, or a source string compiled
/// case-insensitively at filter build time.
#[derive(Debug, Clone)]
pub enum WalkPattern {
    /// A regex supplied ready-made by the caller, used as-is
    Regex(Regex),
    /// A pattern source, compiled with case-insensitive matching
    Source(String),
}

impl From<Regex> for WalkPattern {
    fn from(re: Regex) -> Self {
        WalkPattern::Regex(re)
    }
}

impl From<&str> for WalkPattern {
    fn from(source: &str) -> Self {
        WalkPattern::Source(source.to_string())
    }
}

impl From<String> for WalkPattern {
    fn from(source: String) -> Self {
        WalkPattern::Source(source)
    }
}

impl WalkPattern {
    fn compile(&self) -> Result<Regex> {
        match self {
            WalkPattern::Regex(re) => Ok(re.clone()),
            WalkPattern::Source(source) => RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| FskitError::InvalidPattern {
                    pattern: source.clone(),
                    source: e,
                }),
        }
    }
}

/// Configuration for a walk, immutable for the duration of one call
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Admit only real (non-symlink) directory descriptors
    pub only_dirs: bool,
    /// Admit only non-directory descriptors (files and symlinks)
    pub only_files: bool,
    /// Drop symlink descriptors from the output
    pub exclude_symlinks: bool,
    /// Keep only entries whose relative path matches
    pub match_pattern: Option<WalkPattern>,
    /// Drop entries whose relative path matches
    pub ignore_pattern: Option<WalkPattern>,
    /// Return full descriptors instead of relative-path strings
    pub include_entries: bool,
}

/// Compiled admission predicates for one walk
#[derive(Debug)]
pub struct WalkFilter {
    only_dirs: bool,
    only_files: bool,
    exclude_symlinks: bool,
    matcher: Option<Regex>,
    ignorer: Option<Regex>,
}

impl WalkFilter {
    /// Compile the config's patterns. Fails with
    /// [`FskitError::InvalidPattern`] before any filesystem access.
    pub fn compile(config: &WalkConfig) -> Result<Self> {
        let matcher = config.match_pattern.as_ref().map(|p| p.compile()).transpose()?;
        let ignorer = config.ignore_pattern.as_ref().map(|p| p.compile()).transpose()?;

        Ok(WalkFilter {
            only_dirs: config.only_dirs,
            only_files: config.only_files,
            exclude_symlinks: config.exclude_symlinks,
            matcher,
            ignorer,
        })
    }

    fn admits(&self, entry: &FsEntry) -> bool {
        if self.only_dirs && !entry.is_dir {
            return false;
        }
        if self.exclude_symlinks && entry.is_symlink {
            return false;
        }
        let rel = entry.relative_path.to_string_lossy();
        if let Some(matcher) = &self.matcher {
            if !matcher.is_match(&rel) {
                return false;
            }
        }
        if let Some(ignorer) = &self.ignorer {
            if ignorer.is_match(&rel) {
                return false;
            }
        }
        true
    }

    /// Should this non-directory entry appear in the output?
    pub fn admits_leaf(&self, entry: &FsEntry) -> bool {
        self.admits(entry)
    }

    /// Should this directory's own descriptor appear in the output?
    ///
    /// Governs admission only; the walker descends into the directory either
    /// way.
    pub fn admits_container(&self, entry: &FsEntry) -> bool {
        !self.only_files && self.admits(entry)
    }
}
