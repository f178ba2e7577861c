//! Error types for grid construction and parsing.

use thiserror::Error;

/// The grid handed to a solver is not a non-empty rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// No rows, or every row has no columns.
    #[error("grid is empty")]
    Empty,

    /// Row `row` has `found` cells while row 0 has `expected`.
    #[error("grid is jagged: row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
}

/// Failure while reading a grid from text.
///
/// Line numbers are 1-based and count every input line, including blank
/// and comment lines.
#[derive(Debug, Error)]
pub enum ParseGridError {
    #[error("failed to read grid input")]
    Io(#[from] std::io::Error),

    /// A token that is not a non-negative integer fitting in `u32`.
    #[error("line {line}: invalid cell value '{token}'")]
    InvalidValue { line: usize, token: String },

    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
}
