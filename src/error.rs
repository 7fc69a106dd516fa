//! Error types for reportkit library.

use std::io;
use thiserror::Error;

/// Result type alias for reportkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, rendering, or exporting reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization of a report or theme failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table declares the same header label twice.
    #[error("Duplicate table header: {0}")]
    DuplicateHeader(String),

    /// A table row uses a key that is not one of the table's headers.
    #[error("Row {row} has column \"{column}\" which is not a declared header")]
    UnknownColumn {
        /// Offending key
        column: String,
        /// 0-indexed row number
        row: usize,
    },

    /// A checklist has more checked flags than items.
    #[error("Checklist has {checked} checked flags but only {items} items")]
    ChecklistMismatch {
        /// Number of items
        items: usize,
        /// Number of checked flags
        checked: usize,
    },

    /// The page-rendering engine could not be started.
    #[error("Failed to launch page engine: {0}")]
    EngineLaunch(String),

    /// Loading the rendered markup into the engine failed or timed out.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// The engine failed to produce paginated output.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// The engine was shut down while a request still needed it.
    #[error("Page engine is closed")]
    EngineClosed,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error came from the export boundary.
    pub fn is_export_error(&self) -> bool {
        matches!(
            self,
            Error::EngineLaunch(_) | Error::Navigation(_) | Error::Rasterize(_) | Error::EngineClosed
        )
    }
}
