use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the feeder patrol library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only unrecoverable failures live here. Anomalies the planner can work
/// around are reported as [`crate::Diagnostic`] values instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The node table could not be found at the given path.
    #[error("node table not found at {path}")]
    InputNotFound { path: PathBuf },

    /// The node table header lacks a column the loader depends on.
    #[error("node table is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// Raised when planning is requested on a graph without nodes.
    #[error("graph contains no nodes; nothing to plan")]
    EmptyGraph,

    /// Raised when the exported table could not be moved into place.
    #[error("failed to persist output table to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for CSV reader/writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
