#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The three line- and board-level rules of the puzzle.
//!
//! Each rule is a pure function over cells that have already been stripped of
//! their hint border (except [`is_complete`], which looks at the whole board).
//! Cells without a building, `?` and `*`, never count towards visibility and
//! never collide with each other.

use crate::skyscrapers::board::{Board, Cell};
use bit_vec::BitVec;

/// Counts the buildings visible when looking along `line` from its start.
///
/// A building is visible if it is strictly taller than every building before it.
#[must_use]
pub fn visible_count(line: &[Cell]) -> usize {
    let mut current_max = 0;
    let mut visible = 0;
    for height in line.iter().filter_map(|cell| cell.value()) {
        if height > current_max {
            visible += 1;
            current_max = height;
        }
    }
    visible
}

/// Whether exactly `hint` buildings are visible looking along `line` from its start.
///
/// `line` is the interior only. To check a right or bottom hint, pass the
/// interior reversed, see [`crate::skyscrapers::board::reversed_interior`].
///
/// # Examples
///
/// ```
/// use skyscraper_checker::skyscrapers::board::parse_line;
/// use skyscraper_checker::skyscrapers::rules::checks_visibility;
///
/// let line = parse_line("12453").unwrap();
/// assert!(checks_visibility(&line, 4));
/// assert!(!checks_visibility(&line, 3));
/// ```
#[must_use]
pub fn checks_visibility(line: &[Cell], hint: usize) -> bool {
    visible_count(line) == hint
}

/// The first height that appears a second time in `line`, if any.
#[must_use]
pub fn first_duplicate(line: &[Cell]) -> Option<u8> {
    let mut seen = BitVec::from_elem(10, false);
    for height in line.iter().filter_map(|cell| cell.value()) {
        let index = usize::from(height);
        if index >= seen.len() {
            seen.grow(index + 1 - seen.len(), false);
        }
        if seen.get(index) == Some(true) {
            return Some(height);
        }
        seen.set(index, true);
    }
    None
}

/// Whether no height repeats within `line`.
///
/// # Examples
///
/// ```
/// use skyscraper_checker::skyscrapers::board::parse_line;
/// use skyscraper_checker::skyscrapers::rules::checks_uniqueness;
///
/// assert!(checks_uniqueness(&parse_line("12453").unwrap()));
/// assert!(!checks_uniqueness(&parse_line("12443").unwrap()));
/// ```
#[must_use]
pub fn checks_uniqueness(line: &[Cell]) -> bool {
    first_duplicate(line).is_none()
}

/// Whether no cell anywhere on the board is still `?`.
#[must_use]
pub fn is_complete(board: &Board) -> bool {
    !board.cells().any(Cell::is_unresolved)
}

/// Position of the first `?` on the board, row-major.
#[must_use]
pub fn first_unresolved(board: &Board) -> Option<(usize, usize)> {
    board.rows().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|cell| cell.is_unresolved())
            .map(|col| (row, col))
    })
}
