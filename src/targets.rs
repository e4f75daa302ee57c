use std::path::{Path, PathBuf};

/// A build-artifact directory, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDir {
    pub name: &'static str,
    pub segments: &'static [&'static str],
}

impl ArtifactDir {
    pub const fn new(name: &'static str, segments: &'static [&'static str]) -> Self {
        Self { name, segments }
    }

    /// Relative path built from the segments with the platform separator
    pub fn relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Absolute (or root-relative) location of this directory under `root`
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

/// Artifact directories of the plugin and its example app, in removal order.
pub const ARTIFACT_DIRS: [ArtifactDir; 4] = [
    ArtifactDir::new("Example build output", &["example", "build"]),
    ArtifactDir::new("Example CocoaPods", &["example", "ios", "Pods"]),
    ArtifactDir::new("Plugin Gradle cache", &["android", ".gradle"]),
    ArtifactDir::new("Example Gradle cache", &["example", "android", ".gradle"]),
];

pub fn default_targets() -> Vec<ArtifactDir> {
    ARTIFACT_DIRS.to_vec()
}
