//! Error types for find operations.

use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can fail a find invocation.
///
/// Only root-level failures live here. Problems below the root are skipped
/// during the walk and never reach the caller.
#[derive(Debug, Error)]
pub enum FindError {
    /// Root path is empty, missing or unreadable.
    #[error("Error finding files in path '{}': {reason}", path.display())]
    PathResolution { path: PathBuf, reason: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The walk did not run to completion.
    #[error("Operation interrupted")]
    Interrupted,
}

impl FindError {
    /// Create a path resolution error with a reason.
    pub fn path_resolution(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Self::PathResolution {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Check if this error came from resolving the root path.
    pub fn is_path_resolution(&self) -> bool {
        matches!(self, Self::PathResolution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolution_message() {
        let err = FindError::path_resolution(
            "does-not-exist",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.is_path_resolution());
        let message = err.to_string();
        assert!(message.contains("Error finding files in path"));
        assert!(message.contains("does-not-exist"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = FindError::invalid_config("bad glob");
        assert!(!err.is_path_resolution());
        assert_eq!(err.to_string(), "Invalid configuration: bad glob");
    }
}
