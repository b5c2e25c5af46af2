//! Known dependency manifests and their same-directory precedence.
//!
//! Every recognized file name belongs to exactly one [`Ecosystem`] and has a
//! rank inside it. When several files of one ecosystem sit in the same
//! directory, the lowest rank is the one a scanner should report.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Package ecosystem a manifest belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Ecosystem {
    /// npm, yarn and pnpm projects.
    Npm,
    Rubygems,
    Maven,
    Gradle,
    Sbt,
    Pip,
    Poetry,
    Golangdep,
    Gomodules,
    Govendor,
    Nuget,
    Paket,
    Composer,
    Cocoapods,
    Hex,
    Swiftpm,
}

/// A recognized manifest file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSpec {
    /// Exact file name.
    pub file_name: &'static str,
    /// Ecosystem the file describes.
    pub ecosystem: Ecosystem,
    /// Precedence within the ecosystem (0 wins).
    pub rank: u8,
}

const fn spec(file_name: &'static str, ecosystem: Ecosystem, rank: u8) -> ManifestSpec {
    ManifestSpec {
        file_name,
        ecosystem,
        rank,
    }
}

/// Manifest table, grouped by ecosystem in precedence order.
pub const MANIFESTS: &[ManifestSpec] = &[
    spec("package-lock.json", Ecosystem::Npm, 0),
    spec("yarn.lock", Ecosystem::Npm, 1),
    spec("pnpm-lock.yaml", Ecosystem::Npm, 2),
    spec("package.json", Ecosystem::Npm, 3),
    spec("Gemfile.lock", Ecosystem::Rubygems, 0),
    spec("Gemfile", Ecosystem::Rubygems, 1),
    spec("pom.xml", Ecosystem::Maven, 0),
    // Groovy build wins over the Kotlin DSL when both are present.
    spec("build.gradle", Ecosystem::Gradle, 0),
    spec("build.gradle.kts", Ecosystem::Gradle, 1),
    spec("build.sbt", Ecosystem::Sbt, 0),
    spec("Pipfile", Ecosystem::Pip, 0),
    spec("requirements.txt", Ecosystem::Pip, 1),
    spec("setup.py", Ecosystem::Pip, 2),
    spec("poetry.lock", Ecosystem::Poetry, 0),
    spec("pyproject.toml", Ecosystem::Poetry, 1),
    spec("Gopkg.lock", Ecosystem::Golangdep, 0),
    spec("Gopkg.toml", Ecosystem::Golangdep, 1),
    spec("go.mod", Ecosystem::Gomodules, 0),
    spec("vendor.json", Ecosystem::Govendor, 0),
    spec("project.assets.json", Ecosystem::Nuget, 0),
    spec("packages.config", Ecosystem::Nuget, 1),
    spec("project.json", Ecosystem::Nuget, 2),
    spec("paket.lock", Ecosystem::Paket, 0),
    spec("paket.dependencies", Ecosystem::Paket, 1),
    spec("composer.lock", Ecosystem::Composer, 0),
    spec("composer.json", Ecosystem::Composer, 1),
    spec("Podfile.lock", Ecosystem::Cocoapods, 0),
    spec("Podfile", Ecosystem::Cocoapods, 1),
    spec("mix.exs", Ecosystem::Hex, 0),
    spec("Package.swift", Ecosystem::Swiftpm, 0),
];

/// Look up a file name in the manifest table.
pub fn manifest_for(file_name: &str) -> Option<&'static ManifestSpec> {
    MANIFESTS.iter().find(|m| m.file_name == file_name)
}

/// Check if a file name is a recognized manifest.
pub fn is_manifest(file_name: &str) -> bool {
    manifest_for(file_name).is_some()
}

impl Ecosystem {
    /// File names for this ecosystem, highest precedence first.
    pub fn file_names(self) -> impl Iterator<Item = &'static str> {
        MANIFESTS
            .iter()
            .filter(move |m| m.ecosystem == self)
            .map(|m| m.file_name)
    }

    /// Gradle builds nest: subprojects live under the root build.
    pub fn is_gradle(self) -> bool {
        matches!(self, Ecosystem::Gradle)
    }
}
