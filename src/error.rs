use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{field} must be non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("Storage error ({}): {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Underlying cause of a [`TrackerError::Storage`].
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn storage(path: impl Into<PathBuf>, source: impl Into<StorageFailure>) -> Self {
        TrackerError::Storage {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, TrackerError::Storage { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
