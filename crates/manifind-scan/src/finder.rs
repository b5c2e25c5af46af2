//! JWalk-based manifest finder.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace, warn};

use manifind_core::{FindError, FindResult, FinderConfig, VisitedFile};

use crate::ignore::IgnoreSet;
use crate::select::select;

/// Bounded-depth walker that collects files and selects manifests.
///
/// Directory reads fan out on a rayon pool; jwalk hands entries back in
/// sorted depth-first order, so results do not depend on thread count.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestFinder;

/// Root of a walk after validation.
enum Root {
    Dir(PathBuf),
    File(PathBuf),
}

impl ManifestFinder {
    /// Create a new finder.
    pub fn new() -> Self {
        Self
    }

    /// Run a find on the current thread.
    pub fn find_blocking(&self, config: &FinderConfig) -> Result<FindResult, FindError> {
        let start = Instant::now();
        let ignore = IgnoreSet::from_config(config)?;
        let levels_deep = config.effective_levels_deep() as usize;

        let visited = match resolve_root(&config.path)? {
            Root::File(path) => vec![VisitedFile::new(path, 0)],
            Root::Dir(path) => {
                if path.file_name().is_some_and(|name| ignore.is_match(name)) {
                    debug!(root = %path.display(), "root directory is ignored");
                    return Ok(FindResult::new());
                }
                self.walk(&path, levels_deep, &ignore, config.threads)
            }
        };

        let result = select(&visited, config);

        debug!(
            root = %config.path.display(),
            levels_deep,
            visited = result.all_files_found.len(),
            selected = result.files.len(),
            elapsed = ?start.elapsed(),
            "find complete"
        );

        Ok(result)
    }

    /// Collect every regular file under `root` down to `levels_deep`.
    fn walk(
        &self,
        root: &Path,
        levels_deep: usize,
        ignore: &IgnoreSet,
        threads: usize,
    ) -> Vec<VisitedFile> {
        if levels_deep == 0 {
            return Vec::new();
        }

        let parallelism = match threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            1 => Parallelism::Serial,
            n => Parallelism::RayonNewPool(n),
        };

        let prune = ignore.clone();
        let walker = WalkDir::new(root)
            .parallelism(parallelism)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .max_depth(levels_deep)
            .process_read_dir(move |_depth, _path, _state, children| {
                children.retain(|entry_result| match entry_result {
                    Ok(entry) => !(entry.file_type.is_dir() && prune.is_match(&entry.file_name)),
                    Err(_) => true,
                });

                // Only read directories strictly above the depth bound.
                for entry in children.iter_mut().flatten() {
                    if entry.depth >= levels_deep {
                        entry.read_children_path = None;
                    }
                }
            });

        // Map from path to record, in traversal order.
        let mut files: IndexMap<PathBuf, VisitedFile> = IndexMap::new();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    warn!(
                        path = ?err.path(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };

            let depth = entry.depth;
            if depth == 0 || depth > levels_deep {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type;

            if file_type.is_dir() {
                if let Some(err) = &entry.read_children_error {
                    warn!(path = %path.display(), error = %err, "skipping unreadable directory");
                }
                continue;
            }

            if file_type.is_symlink() {
                // Resolve once; never descend through a link.
                match std::fs::metadata(&path) {
                    Ok(target) if target.is_file() => {}
                    Ok(_) => {
                        trace!(path = %path.display(), "not following symlinked directory");
                        continue;
                    }
                    Err(err) => {
                        trace!(path = %path.display(), error = %err, "skipping broken symlink");
                        continue;
                    }
                }
            } else if !file_type.is_file() {
                continue;
            }

            files
                .entry(path.clone())
                .or_insert_with(|| VisitedFile::new(path, depth));
        }

        files.into_values().collect()
    }
}

/// Validate the root path and make it absolute.
fn resolve_root(path: &Path) -> Result<Root, FindError> {
    if path.as_os_str().is_empty() {
        return Err(FindError::path_resolution(path, "path is empty"));
    }

    let absolute = std::path::absolute(path).map_err(|e| FindError::path_resolution(path, e))?;
    let metadata = std::fs::metadata(&absolute).map_err(|e| FindError::path_resolution(path, e))?;

    if metadata.is_dir() {
        // Listing must work, not just stat.
        std::fs::read_dir(&absolute).map_err(|e| FindError::path_resolution(path, e))?;
        Ok(Root::Dir(absolute))
    } else if metadata.is_file() {
        Ok(Root::File(absolute))
    } else {
        Err(FindError::path_resolution(
            path,
            "not a regular file or directory",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("app/nested/deeper")).unwrap();
        fs::create_dir_all(root.join("node_modules/dep")).unwrap();

        fs::write(root.join("README.md"), "readme").unwrap();
        fs::write(root.join("app/package.json"), "{}").unwrap();
        fs::write(root.join("app/nested/pom.xml"), "<project/>").unwrap();
        fs::write(root.join("app/nested/deeper/go.mod"), "module x").unwrap();
        fs::write(root.join("node_modules/dep/package.json"), "{}").unwrap();

        temp
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_basic_find() {
        let temp = create_test_tree();
        let result = ManifestFinder::new()
            .find_blocking(&FinderConfig::new(temp.path()))
            .unwrap();

        assert_eq!(names(&result.files), vec!["go.mod", "package.json", "pom.xml"]);
        assert_eq!(result.all_files_found.len(), 4);
        assert!(result.all_files_found.contains(&temp.path().join("README.md")));
    }

    #[test]
    fn test_depth_bound() {
        let temp = create_test_tree();
        let config = FinderConfig::builder()
            .path(temp.path())
            .levels_deep(2u32)
            .build()
            .unwrap();
        let result = ManifestFinder::new().find_blocking(&config).unwrap();

        assert_eq!(names(&result.files), vec!["package.json"]);
        assert_eq!(names(&result.all_files_found), vec!["README.md", "package.json"]);
    }

    #[test]
    fn test_zero_depth_finds_nothing() {
        let temp = create_test_tree();
        let config = FinderConfig::builder()
            .path(temp.path())
            .levels_deep(0u32)
            .build()
            .unwrap();
        let result = ManifestFinder::new().find_blocking(&config).unwrap();

        assert!(result.files.is_empty());
        assert!(result.all_files_found.is_empty());
    }

    #[test]
    fn test_ignore_opt_out_inspects_node_modules() {
        let temp = create_test_tree();
        let config = FinderConfig::builder()
            .path(temp.path())
            .include_default_ignores(false)
            .build()
            .unwrap();
        let result = ManifestFinder::new().find_blocking(&config).unwrap();

        assert!(
            result
                .files
                .contains(&temp.path().join("node_modules/dep/package.json"))
        );
    }

    #[test]
    fn test_root_file() {
        let temp = create_test_tree();
        let pom = temp.path().join("app/nested/pom.xml");
        let result = ManifestFinder::new()
            .find_blocking(&FinderConfig::new(&pom))
            .unwrap();

        assert_eq!(result.files, vec![pom.clone()]);
        assert_eq!(result.all_files_found, vec![pom]);
    }

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = ManifestFinder::new()
            .find_blocking(&FinderConfig::new(temp.path().join("missing")))
            .unwrap_err();

        assert!(err.is_path_resolution());
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let temp = create_test_tree();
        let config = FinderConfig::builder()
            .path(temp.path())
            .ignore(vec!["[oops".to_string()])
            .build()
            .unwrap();
        let err = ManifestFinder::new().find_blocking(&config).unwrap_err();

        assert!(matches!(err, FindError::InvalidConfig { .. }));
    }
}
