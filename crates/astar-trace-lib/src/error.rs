use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the A* trace library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The search itself never fails; these errors come from the reader and the
/// report writer that sit around it.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the input declared no `START` line and no override was given.
    #[error("input does not declare a start node (expected a `START <node>` line)")]
    MissingStart,

    /// Raised when the input declared no `GOAL` line and no override was given.
    #[error("input does not declare a goal node (expected a `GOAL <node>` line)")]
    MissingGoal,

    /// Raised when an input file could not be opened or read.
    #[error("failed to read search input from {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
