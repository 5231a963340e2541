//! Errors raised while loading a board.

use thiserror::Error;

/// A board that could not be read or does not have the expected shape.
///
/// Rule violations are never reported through this type; they only turn the
/// verdict of [`crate::skyscrapers::validator::validate`] to `false`.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Reading the board source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source contained no rows.
    #[error("Board is empty")]
    Empty,

    /// Fewer rows than a border plus one interior cell.
    #[error("Board of size {size} is too small, the minimum is 3")]
    TooSmall {
        /// Number of rows found.
        size: usize,
    },

    /// More rows than single-digit heights can fill.
    #[error("Board of size {size} is too large, the maximum is 11")]
    TooLarge {
        /// Number of rows found.
        size: usize,
    },

    /// A row whose length differs from the number of rows.
    #[error("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Number of rows in the board.
        expected: usize,
    },

    /// A character outside `1`-`9`, `?` and `*`.
    #[error("Invalid character '{found}' at row {row}, column {col}")]
    InvalidCharacter {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The rejected character.
        found: char,
    },

    /// `?` on the hint border.
    #[error("Unresolved marker on the border at row {row}, column {col}")]
    UnresolvedHint {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// A corner carrying something other than `*`.
    #[error("Corner at row {row}, column {col} must be '*'")]
    HintedCorner {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// A hint larger than the number of buildings in its line.
    #[error("Hint {hint} at row {row}, column {col} exceeds the maximum of {max}")]
    HintOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The hint value.
        hint: u8,
        /// Interior size of the board.
        max: usize,
    },

    /// A height larger than the interior size.
    #[error("Height {height} at row {row}, column {col} exceeds the maximum of {max}")]
    HeightOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The height value.
        height: u8,
        /// Interior size of the board.
        max: usize,
    },
}
