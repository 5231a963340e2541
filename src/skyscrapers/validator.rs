#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Combines the rules into a verdict for a whole board.
//!
//! [`validate`] answers compliant / non-compliant and stops at the first
//! failing rule, in this order: completion, row uniqueness, row visibility,
//! then uniqueness and visibility of every interior column.
//!
//! [`inspect`] runs every check without stopping and returns a [`Report`]
//! naming each violation. Its verdict always agrees with [`validate`].

use crate::skyscrapers::board::{reversed_interior, strip_border, Board, Cell};
use crate::skyscrapers::rules::{
    checks_uniqueness, checks_visibility, first_duplicate, is_complete, visible_count,
};
use itertools::Itertools;
use log::{debug, trace};
use std::fmt::{self, Display, Formatter};

/// Whether the board follows every rule of the puzzle.
///
/// # Examples
///
/// ```
/// use skyscraper_checker::skyscrapers::board::{Board, EXAMPLE_SEVEN};
/// use skyscraper_checker::skyscrapers::validator::validate;
///
/// let board = Board::try_from(&EXAMPLE_SEVEN[..]).unwrap();
/// assert!(validate(&board));
/// ```
#[must_use]
pub fn validate(board: &Board) -> bool {
    if !is_complete(board) {
        debug!("Board has unresolved cells");
        return false;
    }

    for (index, row) in board.interior_rows() {
        if !checks_uniqueness(strip_border(row)) {
            debug!("Row {index} repeats a height");
            return false;
        }
    }

    for (index, row) in board.rows().enumerate() {
        if !hints_hold(row) {
            debug!("Row {index} breaks a visibility hint");
            return false;
        }
    }

    check_columns(board)
}

/// Uniqueness and visibility of every interior column.
#[must_use]
pub fn check_columns(board: &Board) -> bool {
    board.interior_columns().all(|(index, column)| {
        let unique = checks_uniqueness(strip_border(&column));
        let visible = hints_hold(&column);
        trace!("Column {index}: unique={unique} visible={visible}");
        if !unique {
            debug!("Column {index} repeats a height");
        } else if !visible {
            debug!("Column {index} breaks a visibility hint");
        }
        unique && visible
    })
}

/// Checks the hints at both ends of a full line. A `*` end imposes nothing.
fn hints_hold(line: &[Cell]) -> bool {
    let near = line
        .first()
        .and_then(|cell| cell.value())
        .is_none_or(|hint| checks_visibility(strip_border(line), usize::from(hint)));
    let far = line
        .last()
        .and_then(|cell| cell.value())
        .is_none_or(|hint| checks_visibility(&reversed_interior(line), usize::from(hint)));
    near && far
}

/// A row or column, by its index on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineId {
    /// Row index, counted from the top.
    Row(usize),
    /// Column index, counted from the left.
    Column(usize),
}

impl Display for LineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "row {i}"),
            Self::Column(i) => write!(f, "column {i}"),
        }
    }
}

/// The edge a hint stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Start of a row.
    Left,
    /// End of a row.
    Right,
    /// Start of a column.
    Top,
    /// End of a column.
    Bottom,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        };
        write!(f, "{name}")
    }
}

/// One broken rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// A `?` left on the board.
    Unresolved {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// A height appearing twice in one row or column.
    DuplicateHeight {
        /// The offending line.
        line: LineId,
        /// The repeated height.
        height: u8,
    },
    /// A hint that does not match the buildings seen from its side.
    Visibility {
        /// The line the hint looks along.
        line: LineId,
        /// The edge the hint stands on.
        side: Side,
        /// The hint value.
        expected: usize,
        /// Buildings actually visible.
        actual: usize,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved { row, col } => {
                write!(f, "unresolved cell at row {row}, column {col}")
            }
            Self::DuplicateHeight { line, height } => {
                write!(f, "height {height} repeated in {line}")
            }
            Self::Visibility {
                line,
                side,
                expected,
                actual,
            } => write!(
                f,
                "{side} hint of {line} expects {expected} visible, found {actual}"
            ),
        }
    }
}

/// Every violation found on a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    /// True when no rule is broken.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_compliant() {
            return write!(f, "no violations");
        }
        write!(f, "{}", self.violations.iter().join("\n"))
    }
}

/// Runs every check on the board and records all violations.
#[must_use]
pub fn inspect(board: &Board) -> Report {
    let mut violations = Vec::new();

    for (row, cells) in board.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_unresolved() {
                violations.push(Violation::Unresolved { row, col });
            }
        }
    }

    for (index, row) in board.interior_rows() {
        inspect_line(LineId::Row(index), row, (Side::Left, Side::Right), &mut violations);
    }

    for (index, column) in board.interior_columns() {
        inspect_line(
            LineId::Column(index),
            &column,
            (Side::Top, Side::Bottom),
            &mut violations,
        );
    }

    debug!("Inspection found {} violation(s)", violations.len());
    Report { violations }
}

fn inspect_line(id: LineId, line: &[Cell], sides: (Side, Side), out: &mut Vec<Violation>) {
    if let Some(height) = first_duplicate(strip_border(line)) {
        out.push(Violation::DuplicateHeight { line: id, height });
    }

    let ends = [
        (sides.0, line.first(), visible_count(strip_border(line))),
        (sides.1, line.last(), visible_count(&reversed_interior(line))),
    ];
    for (side, end, actual) in ends {
        if let Some(hint) = end.and_then(|cell| cell.value()) {
            let expected = usize::from(hint);
            if expected != actual {
                out.push(Violation::Visibility {
                    line: id,
                    side,
                    expected,
                    actual,
                });
            }
        }
    }
}
