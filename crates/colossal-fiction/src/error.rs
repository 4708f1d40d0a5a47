//! Error types for the interactive layer.
//!
//! Only failures the caller has to handle live here. Anything the player
//! gets wrong is answered with narration instead.

use std::path::PathBuf;

use colossal_sim::SimError;
use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised while saving, restoring or loading scripts.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading or writing a file failed.
    #[error("{path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// The file is not valid JSON, or not shaped like a snapshot.
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    /// The file belongs to some other program.
    #[error("not a saved adventure (format tag {0:?})")]
    BadFormat(String),

    /// The file was written by an incompatible version.
    #[error("save file version {found} is not supported (expected {expected})")]
    Version {
        /// Version this build reads.
        expected: u32,
        /// Version found in the file.
        found: u32,
    },

    /// The snapshot parsed but describes an impossible world.
    #[error("save file is corrupt: {0}")]
    Invalid(#[from] SimError),

    /// A script file could not be used.
    #[error("script {path}: {reason}")]
    Script {
        /// Script being loaded.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

impl GameError {
    /// Wrap an I/O failure with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Io {
            path: path.into(),
            source,
        }
    }
}
