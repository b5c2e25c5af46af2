//! Manifest discovery engine for manifind.
//!
//! This crate walks a directory tree with jwalk and picks out dependency
//! manifests (`package.json`, `Gemfile.lock`, `pom.xml`, ...).
//!
//! # Overview
//!
//! `manifind-scan` turns a [`FinderConfig`] into a [`FindResult`]:
//!
//! - **Bounded walk** with depth limits and ignore-by-name pruning
//! - **Parallel directory reads** via jwalk/rayon with sorted, reproducible output
//! - **Symlink tolerance**: links to files count, links to directories are not
//!   followed, broken links are skipped
//! - **Selection**: filename allow-list, lockfile-over-descriptor precedence
//!   per directory, gradle subproject collapse
//!
//! # Example
//!
//! ```rust,no_run
//! use manifind_scan::{FinderConfig, find};
//!
//! # async fn run() -> Result<(), manifind_scan::FindError> {
//! let config = FinderConfig::builder()
//!     .path("/path/to/repo")
//!     .levels_deep(6u32)
//!     .build()
//!     .expect("path is set");
//!
//! let result = find(config).await?;
//! for manifest in &result.files {
//!     println!("{}", manifest.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Synchronous callers use [`ManifestFinder::find_blocking`] directly.

mod finder;
mod ignore;
mod select;

pub use finder::ManifestFinder;
pub use ignore::IgnoreSet;
pub use select::select;

// Re-export core types for convenience
pub use manifind_core::{
    DEFAULT_IGNORE, DEFAULT_LEVELS_DEEP, Ecosystem, FindError, FindResult, FinderConfig,
    FinderConfigBuilder, ManifestSpec, VisitedFile, is_manifest, manifest_for,
};

/// Find manifests under `config.path`.
///
/// The walk runs on tokio's blocking pool. Root resolution failures are
/// returned as [`FindError::PathResolution`]; unreadable corners below the
/// root are skipped.
pub async fn find(config: FinderConfig) -> Result<FindResult, FindError> {
    tokio::task::spawn_blocking(move || ManifestFinder::new().find_blocking(&config))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "find task failed");
            FindError::Interrupted
        })?
}
