//! Directory-name matching for pruning during the walk.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use manifind_core::{FindError, FinderConfig};

/// Compiled set of directory names to prune.
///
/// Entries are matched against a bare entry name, never a full path. Plain
/// names compile to exact matches, so `.build` does not match `test.build`.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    set: GlobSet,
    names: Vec<String>,
}

impl IgnoreSet {
    /// Compile a list of names or glob patterns.
    pub fn new<I, S>(names: I) -> Result<Self, FindError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for name in &names {
            let glob = Glob::new(name).map_err(|e| {
                FindError::invalid_config(format!("invalid ignore pattern '{name}': {e}"))
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| FindError::invalid_config(format!("cannot build ignore set: {e}")))?;
        Ok(Self { set, names })
    }

    /// Compile the effective ignore list of a config.
    pub fn from_config(config: &FinderConfig) -> Result<Self, FindError> {
        Self::new(config.effective_ignore())
    }

    /// Check if an entry name should be pruned.
    pub fn is_match(&self, name: impl AsRef<Path>) -> bool {
        self.set.is_match(name.as_ref())
    }

    /// Source entries, in merge order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check if nothing is ignored.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
