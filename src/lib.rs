//! plugin-clean - removes build artifacts of a Flutter plugin project
//!
//! Runs `flutter clean`, then deletes a fixed list of artifact directories
//! under the project root, skipping the ones that are already gone.

pub mod cleaner;
pub mod error;
pub mod platform;
pub mod targets;

pub use cleaner::{
    dir_size, remove_artifact_dir, CleanReport, Cleaner, CommandStatus, ExternalCommand, Removal,
};
pub use error::{CleanError, Result};
pub use targets::{default_targets, ArtifactDir, ARTIFACT_DIRS};
