//! Core types for manifind.
//!
//! This crate provides the data structures shared by the scanner and its
//! consumers: the finder configuration, the error taxonomy, walk results and
//! the static table of recognized dependency manifests.

mod config;
mod error;
mod manifest;
mod result;

pub use config::{DEFAULT_IGNORE, DEFAULT_LEVELS_DEEP, FinderConfig, FinderConfigBuilder};
pub use error::FindError;
pub use manifest::{Ecosystem, MANIFESTS, ManifestSpec, is_manifest, manifest_for};
pub use result::{FindResult, VisitedFile};
