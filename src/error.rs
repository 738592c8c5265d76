//! Error types for the relearn crate

use thiserror::Error;

/// Main error type for the relearn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("can't play at {cell}: cell is already occupied")]
    OccupiedCell { cell: usize },

    #[error("cell {cell} is out of bounds (must be 0-8)")]
    InvalidCell { cell: usize },

    #[error("position number {value} is out of range (must be below 19683)")]
    PositionOutOfRange { value: u32 },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {cell} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        cell: usize,
        context: String,
    },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("value table must have {expected} entries, got {got}")]
    TableSizeMismatch { expected: usize, got: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

/// Check that a rate-like parameter lies in the closed unit interval.
pub(crate) fn ensure_unit_interval(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}
