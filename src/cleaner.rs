use crate::error::{CleanError, Result};
use crate::platform;
use crate::targets::{default_targets, ArtifactDir};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Calculate the total size of a directory recursively.
///
/// Symbolic links are counted by their own size and never followed.
/// Entries that cannot be read below the root count as zero.
pub fn dir_size(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut size = 0u64;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => {
                size += dir_size(&entry_path).unwrap_or(0);
            }
            Ok(_) => {
                if let Ok(metadata) = fs::symlink_metadata(&entry_path) {
                    size += metadata.len();
                }
            }
            Err(e) => debug!("Skipping {} while sizing: {}", entry_path.display(), e),
        }
    }

    Ok(size)
}

/// What happened to a single artifact directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The directory did not exist
    Skipped,
    /// The directory and everything below it was deleted
    Removed { bytes: u64 },
    /// Dry run: the directory exists and would have been deleted
    WouldRemove { bytes: u64 },
}

/// Remove one artifact directory if it exists.
///
/// A missing path (including a dangling symlink) is not an error. A path
/// whose existence cannot be checked fails with
/// [`CleanError::Inaccessible`]. A path that exists but is not a real
/// directory (a file or a symbolic link) is refused with
/// [`CleanError::NotADirectory`].
pub fn remove_artifact_dir(path: &Path, dry_run: bool) -> Result<Removal> {
    let inaccessible = |source: std::io::Error| CleanError::Inaccessible {
        path: path.to_path_buf(),
        source,
    };

    if !path.try_exists().map_err(inaccessible)? {
        debug!("Not present, skipping: {}", path.display());
        return Ok(Removal::Skipped);
    }

    let metadata = fs::symlink_metadata(path).map_err(inaccessible)?;
    if metadata.file_type().is_symlink() || !metadata.is_dir() {
        return Err(CleanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let bytes = match dir_size(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Could not size {}: {}", path.display(), e);
            0
        }
    };

    if dry_run {
        info!("[DRY RUN] Would remove {}", path.display());
        return Ok(Removal::WouldRemove { bytes });
    }

    fs::remove_dir_all(path).map_err(|source| CleanError::RemoveFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Removed {}", path.display());

    Ok(Removal::Removed { bytes })
}

/// Observed outcome of the external clean command. Never fails a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    NotRun,
    Succeeded,
    Failed { code: Option<i32> },
    Unavailable { reason: String },
}

/// An external project-level clean command, such as `flutter clean`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn flutter_clean() -> Self {
        Self::new("flutter", ["clean"])
    }

    /// Run the command in `dir` with inherited stdio and report how it went.
    pub fn run(&self, dir: &Path) -> CommandStatus {
        info!("Running {}", self);
        let status = platform::tool_command(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .status();

        match status {
            Ok(status) if status.success() => {
                debug!("{} finished successfully", self);
                CommandStatus::Succeeded
            }
            Ok(status) => {
                warn!("{} exited with {}, continuing", self, status);
                CommandStatus::Failed {
                    code: status.code(),
                }
            }
            Err(e) => {
                warn!("Could not run {}: {}, continuing", self, e);
                CommandStatus::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl std::fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, "`")
    }
}

#[derive(Debug, Clone)]
pub struct TargetOutcome {
    pub name: &'static str,
    pub path: PathBuf,
    pub removal: Removal,
}

/// Summary of a cleaner run
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub command: CommandStatus,
    pub targets: Vec<TargetOutcome>,
}

impl CleanReport {
    pub fn removed_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| !matches!(t.removal, Removal::Skipped))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.targets.len() - self.removed_count()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.targets
            .iter()
            .map(|t| match t.removal {
                Removal::Removed { bytes } | Removal::WouldRemove { bytes } => bytes,
                Removal::Skipped => 0,
            })
            .sum()
    }

    /// True when the report describes removals that were only simulated
    pub fn is_dry_run(&self) -> bool {
        self.targets
            .iter()
            .any(|t| matches!(t.removal, Removal::WouldRemove { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.removed_count() == 0
    }

    pub fn display_status(&self) -> String {
        let mut status: Vec<String> = self
            .targets
            .iter()
            .map(|t| match t.removal {
                Removal::Skipped => format!("{}: not present", t.name),
                Removal::Removed { .. } => format!("{}: removed", t.name),
                Removal::WouldRemove { .. } => format!("{}: would remove", t.name),
            })
            .collect();

        let (removed_label, freed_label) = if self.is_dry_run() {
            ("Directories to remove", "Space to free")
        } else {
            ("Directories removed", "Space freed")
        };
        status.push(format!("{}: {}", removed_label, self.removed_count()));
        status.push(format!(
            "{}: {:.2} MB",
            freed_label,
            self.bytes_freed() as f64 / (1024.0 * 1024.0)
        ));

        status.join("\n")
    }
}

/// Removes the known artifact directories of a plugin project
#[derive(Debug, Clone)]
pub struct Cleaner {
    root: PathBuf,
    targets: Vec<ArtifactDir>,
    command: Option<ExternalCommand>,
    dry_run: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Cleaner {
    /// Cleaner for the project at `root` with the default targets and `flutter clean`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            targets: default_targets(),
            command: Some(ExternalCommand::flutter_clean()),
            dry_run: false,
        }
    }

    pub fn with_targets(mut self, targets: Vec<ArtifactDir>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_command(mut self, command: ExternalCommand) -> Self {
        self.command = Some(command);
        self
    }

    pub fn without_command(mut self) -> Self {
        self.command = None;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn targets(&self) -> &[ArtifactDir] {
        &self.targets
    }

    /// Run the external clean command, then remove each target in order.
    ///
    /// The command's result is ignored. The first removal that fails
    /// stops the run and later targets are left untouched.
    pub fn run(&self) -> Result<CleanReport> {
        info!("Cleaning project at {}", self.root.display());

        let command = match (&self.command, self.dry_run) {
            (Some(command), false) => command.run(&self.root),
            (Some(command), true) => {
                info!("[DRY RUN] Would run {}", command);
                CommandStatus::NotRun
            }
            (None, _) => CommandStatus::NotRun,
        };

        let mut targets = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let path = target.resolve(&self.root);
            let removal = remove_artifact_dir(&path, self.dry_run)?;
            targets.push(TargetOutcome {
                name: target.name,
                path,
                removal,
            });
        }

        let report = CleanReport { command, targets };
        info!(
            "Removed {} of {} directories, {} bytes",
            report.removed_count(),
            report.targets.len(),
            report.bytes_freed()
        );

        Ok(report)
    }
}
