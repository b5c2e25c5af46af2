//! Finder configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Depth used when the caller does not give one.
pub const DEFAULT_LEVELS_DEEP: u32 = 4;

/// Directory names that are always pruned unless the caller opts out.
///
/// Package manager caches and build outputs hold vendored copies of
/// manifests that do not describe the project being scanned.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".build"];

/// Configuration for a single find invocation.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct FinderConfig {
    /// Root path to search.
    pub path: PathBuf,

    /// Maximum depth to descend (None = `DEFAULT_LEVELS_DEEP`).
    #[builder(default)]
    #[serde(default)]
    pub levels_deep: Option<u32>,

    /// Directory names (or glob patterns) to prune.
    #[builder(default)]
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Merge `DEFAULT_IGNORE` into `ignore`.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_default_ignores: bool,

    /// Exact file names to keep (empty = every recognized manifest).
    #[builder(default)]
    #[serde(default)]
    pub filter: Vec<String>,

    /// Number of threads for directory fan-out (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,

    /// Drop gradle builds nested under another kept gradle build.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub collapse_gradle_subprojects: bool,
}

fn default_true() -> bool {
    true
}

impl FinderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        // An empty path is a runtime resolution failure, not a config error.
        if self.path.is_none() {
            return Err("Root path is required".to_string());
        }
        if let Some(ref ignore) = self.ignore {
            if ignore.iter().any(|name| name.is_empty()) {
                return Err("Ignore entries cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl FinderConfig {
    /// Create a new finder config builder.
    pub fn builder() -> FinderConfigBuilder {
        FinderConfigBuilder::default()
    }

    /// Create a config with defaults for everything but the root path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            levels_deep: None,
            ignore: Vec::new(),
            include_default_ignores: true,
            filter: Vec::new(),
            threads: 0,
            collapse_gradle_subprojects: true,
        }
    }

    /// Normalize a loosely typed depth.
    ///
    /// `NaN`, infinities and negative values fall back to the default depth;
    /// fractional values are truncated.
    pub fn levels_deep_from_f64(value: f64) -> Option<u32> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(value.trunc().min(u32::MAX as f64) as u32)
    }

    /// Depth bound after applying the default.
    pub fn effective_levels_deep(&self) -> u32 {
        self.levels_deep.unwrap_or(DEFAULT_LEVELS_DEEP)
    }

    /// Ignore entries after merging the built-in defaults.
    ///
    /// Caller entries come first; duplicates are dropped.
    pub fn effective_ignore(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.ignore.len() + DEFAULT_IGNORE.len());
        let defaults = DEFAULT_IGNORE
            .iter()
            .filter(|_| self.include_default_ignores)
            .map(|name| name.to_string());

        for name in self.ignore.iter().cloned().chain(defaults) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Check if a file name passes the allow-list.
    pub fn is_filtered_in(&self, name: &str) -> bool {
        self.filter.iter().any(|f| f == name)
    }

    /// Whether an allow-list was given.
    pub fn has_filter(&self) -> bool {
        !self.filter.is_empty()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = FinderConfig::builder()
            .path("/home/user/project")
            .levels_deep(6u32)
            .filter(vec!["package.json".to_string()])
            .build()
            .unwrap();

        assert_eq!(config.path, PathBuf::from("/home/user/project"));
        assert_eq!(config.levels_deep, Some(6));
        assert!(config.include_default_ignores);
        assert!(config.collapse_gradle_subprojects);
        assert!(config.is_filtered_in("package.json"));
        assert!(!config.is_filtered_in("yarn.lock"));
    }

    #[test]
    fn test_builder_requires_path() {
        let err = FinderConfig::builder().build().unwrap_err();
        assert!(err.to_string().contains("Root path is required"));
    }

    #[test]
    fn test_builder_rejects_empty_ignore_entry() {
        let result = FinderConfig::builder()
            .path("/test")
            .ignore(vec![String::new()])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_accepts_empty_path() {
        // Rejected later by the finder with a path resolution error.
        let config = FinderConfig::builder().path("").build().unwrap();
        assert!(config.path.as_os_str().is_empty());
    }

    #[test]
    fn test_default_depth() {
        let config = FinderConfig::new("/test");
        assert_eq!(config.effective_levels_deep(), DEFAULT_LEVELS_DEEP);
    }

    #[test]
    fn test_levels_deep_from_f64() {
        assert_eq!(FinderConfig::levels_deep_from_f64(f64::NAN), None);
        assert_eq!(FinderConfig::levels_deep_from_f64(f64::INFINITY), None);
        assert_eq!(FinderConfig::levels_deep_from_f64(-1.0), None);
        assert_eq!(FinderConfig::levels_deep_from_f64(0.0), Some(0));
        assert_eq!(FinderConfig::levels_deep_from_f64(6.0), Some(6));
        assert_eq!(FinderConfig::levels_deep_from_f64(2.9), Some(2));
    }

    #[test]
    fn test_effective_ignore_merges_defaults() {
        let config = FinderConfig::builder()
            .path("/test")
            .ignore(vec!["target".to_string(), "node_modules".to_string()])
            .build()
            .unwrap();

        assert_eq!(
            config.effective_ignore(),
            vec!["target", "node_modules", ".build"]
        );
    }

    #[test]
    fn test_effective_ignore_opt_out() {
        let mut config = FinderConfig::new("/test");
        assert_eq!(config.effective_ignore(), vec!["node_modules", ".build"]);

        config.include_default_ignores = false;
        assert!(config.effective_ignore().is_empty());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: FinderConfig =
            serde_json::from_str(r#"{"path": "/repo", "filter": ["Gemfile"]}"#).unwrap();

        assert_eq!(config.path, PathBuf::from("/repo"));
        assert_eq!(config.levels_deep, None);
        assert_eq!(config.effective_levels_deep(), 4);
        assert!(config.include_default_ignores);
        assert_eq!(config.filter, vec!["Gemfile"]);

        let config: FinderConfig =
            serde_json::from_str(r#"{"path": "/repo", "levelsDeep": 1}"#).unwrap();
        assert_eq!(config.levels_deep, Some(1));
    }
}
