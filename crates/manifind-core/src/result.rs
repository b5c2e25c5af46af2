//! Walk output types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::manifest::{ManifestSpec, manifest_for};

/// A regular file reached during a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedFile {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// File name (not full path).
    pub name: CompactString,
    /// Depth below the root (root children are at depth 1).
    pub depth: usize,
    /// Directory containing the file.
    pub parent: PathBuf,
}

impl VisitedFile {
    /// Create a visited file record from its full path.
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default();
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            path,
            name,
            depth,
            parent,
        }
    }

    /// Manifest table entry for this file, if recognized.
    pub fn manifest(&self) -> Option<&'static ManifestSpec> {
        manifest_for(&self.name)
    }
}

/// Result of a find invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResult {
    /// Selected manifests, in traversal order.
    pub files: Vec<PathBuf>,
    /// Every regular file visited, in traversal order.
    pub all_files_found: Vec<PathBuf>,
}

impl FindResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Visited files that were not selected.
    pub fn filtered_out(&self) -> impl Iterator<Item = &PathBuf> {
        self.all_files_found
            .iter()
            .filter(|path| !self.files.contains(path))
    }
}
