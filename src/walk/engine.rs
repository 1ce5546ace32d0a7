//! Recursive directory traversal
//!
//! One partition/filter/merge algorithm drives both execution modes. The
//! sequential walker recurses into subdirectories in listing order; the
//! concurrent walker spawns one task per subdirectory and merges the
//! branches in spawn order, so both produce the same ordered result for the
//! same tree and configuration.
//!
//! Admission predicates decide only what appears in the output. They never
//! prune recursion: a directory filtered out of the result still has its
//! descendants enumerated and independently filtered.

use crate::error::{FskitError, Result};
use crate::walk::entry::{list_level, list_level_async, FsEntry};
use crate::walk::filter::{WalkConfig, WalkFilter};
use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of a walk, shaped by `WalkConfig::include_entries`
#[derive(Debug, Clone, PartialEq)]
pub enum WalkOutput {
    /// Relative paths, platform separator
    Paths(Vec<String>),
    /// Full descriptors
    Entries(Vec<FsEntry>),
}

impl WalkOutput {
    /// Number of entries in the result
    pub fn len(&self) -> usize {
        match self {
            WalkOutput::Paths(paths) => paths.len(),
            WalkOutput::Entries(entries) => entries.len(),
        }
    }

    /// True when the walk produced nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The path list, if this is a path projection
    pub fn into_paths(self) -> Option<Vec<String>> {
        match self {
            WalkOutput::Paths(paths) => Some(paths),
            WalkOutput::Entries(_) => None,
        }
    }

    /// The descriptor list, if this is a descriptor projection
    pub fn into_entries(self) -> Option<Vec<FsEntry>> {
        match self {
            WalkOutput::Paths(_) => None,
            WalkOutput::Entries(entries) => Some(entries),
        }
    }
}

/// Walk a directory tree sequentially.
///
/// Subdirectories are visited one at a time, in listing order. Returns
/// relative paths, or full descriptors when `config.include_entries` is set.
///
/// Fails fast: the first listing error anywhere in the tree aborts the walk
/// and is returned with the offending path attached; no partial result is
/// produced. An invalid pattern fails before any filesystem access.
pub fn walk(root: impl AsRef<Path>, config: &WalkConfig) -> Result<WalkOutput> {
    let filter = WalkFilter::compile(config)?;
    let root = canonical_root(root.as_ref())?;
    tracing::debug!("walking {} sequentially", root.display());

    let entries = walk_tree(&root, Path::new(""), &filter)?;
    Ok(project(entries, config.include_entries))
}

/// Walk a directory tree with concurrent fan-out per subdirectory.
///
/// Produces exactly the same ordered result as [`walk`] for the same tree
/// and configuration; only the completion mechanism differs. The first
/// failing subtree fails the whole call, and results of still-running
/// sibling tasks are discarded.
pub async fn walk_concurrent(root: impl AsRef<Path>, config: &WalkConfig) -> Result<WalkOutput> {
    let filter = Arc::new(WalkFilter::compile(config)?);
    let root = tokio::fs::canonicalize(root.as_ref())
        .await
        .map_err(|e| FskitError::classify_io(root.as_ref(), e))?;
    tracing::debug!("walking {} concurrently", root.display());

    let entries = walk_task(root, PathBuf::new(), filter).await?;
    Ok(project(entries, config.include_entries))
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(root).map_err(|e| FskitError::classify_io(root, e))
}

/// Split one level's entries into leaves and containers, both in listing
/// order. Symlinks and special entries are leaves; only real directories are
/// containers.
fn split_level(entries: Vec<FsEntry>) -> (Vec<FsEntry>, Vec<FsEntry>) {
    entries.into_iter().partition(|e| !e.is_dir)
}

/// Merge one level: admitted leaves first, then each container's branch in
/// container listing order. A branch is the container's own descriptor (only
/// if admitted) followed by its complete descendant list. `branches[i]` must
/// be the descendants of `containers[i]`.
fn assemble(
    leaves: Vec<FsEntry>,
    containers: Vec<FsEntry>,
    branches: Vec<Vec<FsEntry>>,
    filter: &WalkFilter,
) -> Vec<FsEntry> {
    let mut out: Vec<FsEntry> = leaves
        .into_iter()
        .filter(|e| filter.admits_leaf(e))
        .collect();

    for (container, branch) in containers.into_iter().zip(branches) {
        if filter.admits_container(&container) {
            out.push(container);
        }
        out.extend(branch);
    }
    out
}

fn walk_tree(dir: &Path, prefix: &Path, filter: &WalkFilter) -> Result<Vec<FsEntry>> {
    let (leaves, containers) = split_level(list_level(dir, prefix)?);

    let mut branches = Vec::with_capacity(containers.len());
    for container in &containers {
        branches.push(walk_tree(&container.path, &container.relative_path, filter)?);
    }

    Ok(assemble(leaves, containers, branches, filter))
}

fn walk_task(
    dir: PathBuf,
    prefix: PathBuf,
    filter: Arc<WalkFilter>,
) -> BoxFuture<'static, Result<Vec<FsEntry>>> {
    async move {
        let (leaves, containers) = split_level(list_level_async(&dir, &prefix).await?);

        // One task per container. Handles are awaited in spawn order, never
        // completion order, so sibling ordering does not depend on I/O
        // timing and matches the sequential walker.
        let mut handles = Vec::with_capacity(containers.len());
        for container in &containers {
            handles.push(tokio::spawn(walk_task(
                container.path.clone(),
                container.relative_path.clone(),
                Arc::clone(&filter),
            )));
        }

        let mut branches = Vec::with_capacity(handles.len());
        for handle in handles {
            let branch = handle
                .await
                .map_err(|e| FskitError::Task(e.to_string()))??;
            branches.push(branch);
        }

        Ok(assemble(leaves, containers, branches, &filter))
    }
    .boxed()
}

fn project(entries: Vec<FsEntry>, include_entries: bool) -> WalkOutput {
    if include_entries {
        WalkOutput::Entries(entries)
    } else {
        WalkOutput::Paths(
            entries
                .into_iter()
                .map(|e| e.relative_path.to_string_lossy().into_owned())
                .collect(),
        )
    }
}
