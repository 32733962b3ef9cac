// error.rs - Error types for the Game of Life core

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised by grid construction, cell access and pattern stamping.
///
/// All of these are precondition violations reported straight back to the
/// caller; nothing here is transient or worth retrying.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Requested grid dimension is too small.
    #[error("invalid grid size {size}: must be greater than {min}")]
    InvalidSize {
        /// Size that was requested.
        size: usize,
        /// Exclusive lower bound.
        min: usize,
    },

    /// Direct cell access outside `[0, size)`.
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    IndexOutOfBounds { row: usize, col: usize, size: usize },

    /// Stamping a pattern would write past the edge of the grid.
    #[error("pattern '{pattern}' anchored at ({row}, {col}) does not fit in a {size}x{size} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        row: usize,
        col: usize,
        size: usize,
    },

    #[error("alive probability {0} is not within [0, 1]")]
    InvalidProbability(f64),

    /// Raw cell buffer does not hold `size * size` entries.
    #[error("cell buffer has {got} entries, expected {expected}")]
    BufferLength { expected: usize, got: usize },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    /// Malformed text grid.
    #[error("grid text line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A row coroutine panicked or was cancelled before finishing its row.
    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}
