use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors raised while removing artifact directories
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to remove directory {}", path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot access {}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

/// Result type alias for cleaner error handling
pub type Result<T> = std::result::Result<T, CleanError>;
