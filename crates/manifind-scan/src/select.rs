//! Selection of manifests from the files a walk visited.
//!
//! Runs after traversal, in three steps:
//! 1. Candidates: filter matches, or every recognized manifest when no
//!    filter is set
//! 2. Same-directory precedence: one survivor per (directory, ecosystem)
//! 3. Gradle collapse: nested gradle builds fold into the nearest kept
//!    ancestor build
//!
//! Output keeps the traversal order of the input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use manifind_core::{FindResult, FinderConfig, VisitedFile};

/// Build the final result from visited files.
pub fn select(visited: &[VisitedFile], config: &FinderConfig) -> FindResult {
    let candidates: Vec<&VisitedFile> = visited
        .iter()
        .filter(|file| is_candidate(file, config))
        .collect();

    let mut dropped = precedence_losers(&candidates);
    if config.collapse_gradle_subprojects {
        let nested = nested_gradle_builds(&candidates, &dropped);
        dropped.extend(nested);
    }

    FindResult {
        files: candidates
            .iter()
            .filter(|file| !dropped.contains(file.path.as_path()))
            .map(|file| file.path.clone())
            .collect(),
        all_files_found: visited.iter().map(|file| file.path.clone()).collect(),
    }
}

fn is_candidate(file: &VisitedFile, config: &FinderConfig) -> bool {
    if config.has_filter() {
        config.is_filtered_in(&file.name)
    } else {
        file.manifest().is_some()
    }
}

/// Paths that lose to a higher-ranked alternate in the same directory.
fn precedence_losers<'a>(candidates: &[&'a VisitedFile]) -> HashSet<&'a Path> {
    let groups = candidates
        .iter()
        .filter_map(|file| file.manifest().map(|spec| (*file, spec)))
        .into_group_map_by(|&(file, spec)| (file.parent.as_path(), spec.ecosystem));

    let mut losers = HashSet::new();
    for alternates in groups.into_values() {
        let Some((winner, _)) = alternates.iter().min_by_key(|(_, spec)| spec.rank) else {
            continue;
        };
        losers.extend(
            alternates
                .iter()
                .filter(|(file, _)| file.path != winner.path)
                .map(|&(file, _)| file.path.as_path()),
        );
    }
    losers
}

/// Kept gradle builds that sit below another kept gradle build.
fn nested_gradle_builds<'a>(
    candidates: &[&'a VisitedFile],
    dropped: &HashSet<&'a Path>,
) -> Vec<&'a Path> {
    let kept: Vec<&'a VisitedFile> = candidates
        .iter()
        .copied()
        .filter(|file| !dropped.contains(file.path.as_path()))
        .filter(|file| file.manifest().is_some_and(|spec| spec.ecosystem.is_gradle()))
        .collect();

    let build_dirs: HashSet<PathBuf> = kept.iter().map(|file| file.parent.clone()).collect();

    kept.into_iter()
        .filter(|file| {
            file.parent
                .ancestors()
                .skip(1)
                .any(|ancestor| build_dirs.contains(ancestor))
        })
        .map(|file| file.path.as_path())
        .collect()
}
