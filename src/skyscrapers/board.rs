#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The board model: cells, lines and the square grid with its hint border.
//!
//! A board of size `N` is `N` rows of `N` cells. Row `0`, row `N - 1`, column
//! `0` and column `N - 1` form the hint border, everything else is the
//! interior where the buildings stand.
//!
//! Structural checks happen once, in [`Board::new`]. Every board that exists
//! is square, uses only the known alphabet, has `*` in its corners and keeps
//! its hints and heights within the interior size. The rule checks in
//! [`crate::skyscrapers::rules`] can therefore assume a well-formed board.

use crate::skyscrapers::error::BoardError;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Smallest board: a border around a single interior cell.
pub const MIN_SIZE: usize = 3;

/// Largest board: heights are single digits, so the interior is at most 9 wide.
pub const MAX_SIZE: usize = 11;

/// Character for an unresolved interior cell.
pub const UNRESOLVED: char = '?';

/// Character for a border cell without a hint, or an interior lot without a building.
pub const EMPTY: char = '*';

/// A single position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// A digit: a building height in the interior, a hint on the border.
    Height(u8),
    /// `?`, an interior cell not filled in yet.
    Unresolved,
    /// `*`, no hint on the border, no building in the interior.
    Empty,
}

impl Cell {
    /// Parses one character of the board alphabet.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            UNRESOLVED => Some(Self::Unresolved),
            EMPTY => Some(Self::Empty),
            '1'..='9' => c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self::Height),
            _ => None,
        }
    }

    /// The digit carried by this cell, if any.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Self::Height(h) => Some(h),
            Self::Unresolved | Self::Empty => None,
        }
    }

    /// Whether this is the `?` marker.
    #[must_use]
    pub const fn is_unresolved(self) -> bool {
        matches!(self, Self::Unresolved)
    }

    /// Character used for this cell in the board source format.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Height(h) => char::from(b'0' + h),
            Self::Unresolved => UNRESOLVED,
            Self::Empty => EMPTY,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One row or column of cells. Boards never exceed [`MAX_SIZE`], so lines stay inline.
pub type Line = SmallVec<[Cell; MAX_SIZE]>;

/// Parses a line of board characters, e.g. `"12453"`.
///
/// # Errors
///
/// `BoardError::InvalidCharacter` for anything outside `1`-`9`, `?` and `*`.
/// The reported row is always `0`.
pub fn parse_line(text: &str) -> Result<Line, BoardError> {
    text.chars()
        .enumerate()
        .map(|(col, c)| {
            Cell::from_char(c).ok_or(BoardError::InvalidCharacter {
                row: 0,
                col,
                found: c,
            })
        })
        .collect()
}

/// Drops the two hint cells at either end of a full row or column.
///
/// Lines shorter than two cells have no interior.
#[must_use]
pub fn strip_border(line: &[Cell]) -> &[Cell] {
    if line.len() < 2 {
        return &[];
    }
    &line[1..line.len() - 1]
}

/// The interior of a line read from its far end, for checking the right or bottom hint.
#[must_use]
pub fn reversed_interior(line: &[Cell]) -> Line {
    strip_border(line).iter().rev().copied().collect()
}

/// A square skyscrapers board including its hint border.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Builds a board after checking its structure.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, scanning row by row.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        match size {
            0 => return Err(BoardError::Empty),
            s if s < MIN_SIZE => return Err(BoardError::TooSmall { size }),
            s if s > MAX_SIZE => return Err(BoardError::TooLarge { size }),
            _ => {}
        }

        let max = size - 2;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }

            for (col, &cell) in cells.iter().enumerate() {
                let on_row_edge = row == 0 || row == size - 1;
                let on_col_edge = col == 0 || col == size - 1;

                if on_row_edge && on_col_edge {
                    if cell != Cell::Empty {
                        return Err(BoardError::HintedCorner { row, col });
                    }
                    continue;
                }

                match cell {
                    Cell::Unresolved if on_row_edge || on_col_edge => {
                        return Err(BoardError::UnresolvedHint { row, col });
                    }
                    Cell::Height(hint) if (on_row_edge || on_col_edge) && usize::from(hint) > max => {
                        return Err(BoardError::HintOutOfRange {
                            row,
                            col,
                            hint,
                            max,
                        });
                    }
                    Cell::Height(height) if usize::from(height) > max => {
                        return Err(BoardError::HeightOutOfRange {
                            row,
                            col,
                            height,
                            max,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(Self { rows })
    }

    /// Parses a board from its rows of text, one string per row.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidCharacter` with the real position of the bad
    /// character, or any structural error from [`Board::new`].
    pub fn from_lines<I, S>(lines: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, c)| {
                        Cell::from_char(c).ok_or(BoardError::InvalidCharacter { row, col, found: c })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows)
    }

    /// Number of rows, equal to the number of columns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Number of building positions along one line.
    #[must_use]
    pub fn interior_size(&self) -> usize {
        self.size() - 2
    }

    /// Row `index`, border cells included.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`Board::size`].
    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        &self.rows[index]
    }

    /// Column `index` read top to bottom, border cells included.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`Board::size`].
    #[must_use]
    pub fn column(&self, index: usize) -> Line {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Every row, border rows included.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Rows that carry buildings, i.e. without the top and bottom hint rows.
    pub fn interior_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows()
            .enumerate()
            .skip(1)
            .take(self.interior_size())
    }

    /// Columns that carry buildings, each read top to bottom.
    pub fn interior_columns(&self) -> impl Iterator<Item = (usize, Line)> + '_ {
        (1..=self.interior_size()).map(|index| (index, self.column(index)))
    }

    /// The board mirrored along its main diagonal: rows become columns.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            rows: (0..self.size())
                .map(|index| self.column(index).into_vec())
                .collect(),
        }
    }

    /// Number of border cells that carry a hint.
    #[must_use]
    pub fn hint_count(&self) -> usize {
        let last = self.size() - 1;
        self.rows()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(col, _)| row == 0 || row == last || col == 0 || col == last)
            })
            .filter(|(_, cell)| cell.value().is_some())
            .count()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Rows may be separated by newlines, commas or any other whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|row| !row.is_empty()),
        )
    }
}

impl TryFrom<&[&str]> for Board {
    type Error = BoardError;

    fn try_from(lines: &[&str]) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .join("\n");
        write!(f, "{text}")
    }
}

/// The completed 5x5 board used throughout the documentation and tests.
pub const EXAMPLE_SEVEN: [&str; 7] = [
    "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Board {
        Board::try_from(&EXAMPLE_SEVEN[..]).unwrap()
    }

    #[test]
    fn test_cell_from_char() {
        assert_eq!(Cell::from_char('4'), Some(Cell::Height(4)));
        assert_eq!(Cell::from_char('?'), Some(Cell::Unresolved));
        assert_eq!(Cell::from_char('*'), Some(Cell::Empty));
        assert_eq!(Cell::from_char('0'), None);
        assert_eq!(Cell::from_char('a'), None);
    }

    #[test]
    fn test_parse_line() {
        let line = parse_line("1?*").unwrap();
        assert_eq!(
            line.as_slice(),
            &[Cell::Height(1), Cell::Unresolved, Cell::Empty]
        );
        assert!(matches!(
            parse_line("12x"),
            Err(BoardError::InvalidCharacter { col: 2, found: 'x', .. })
        ));
    }

    #[test]
    fn test_strip_border_and_reverse() {
        let line = parse_line("412453*").unwrap();
        assert_eq!(strip_border(&line), parse_line("12453").unwrap().as_slice());
        assert_eq!(reversed_interior(&line), parse_line("35421").unwrap());
        assert!(strip_border(&[Cell::Empty]).is_empty());
    }

    #[test]
    fn test_display_round_trips_source() {
        assert_eq!(example().to_string(), EXAMPLE_SEVEN.join("\n"));
    }

    #[test]
    fn test_column_reads_top_to_bottom() {
        let board = example();
        assert_eq!(board.column(1), parse_line("*125342").unwrap());
        assert_eq!(board.column(6), parse_line("***5***").unwrap());
    }

    #[test]
    fn test_transposed_swaps_rows_and_columns() {
        let board = example();
        let transposed = board.transposed();
        for i in 0..board.size() {
            assert_eq!(transposed.row(i), board.column(i).as_slice());
        }
        assert_eq!(transposed.transposed(), board);
    }

    #[test]
    fn test_interior_lines() {
        let board = example();
        let rows: Vec<usize> = board.interior_rows().map(|(i, _)| i).collect();
        let cols: Vec<usize> = board.interior_columns().map(|(i, _)| i).collect();
        assert_eq!(rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(cols, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_hint_count() {
        // top: 2,1  left: 4,4  right: 5  bottom: 2,1
        assert_eq!(example().hint_count(), 7);
    }

    #[test]
    fn test_from_str_accepts_separators() {
        let text = "***21**,412453*,423145*\n*543215 *35214*\r\n*41532*\n*2*1***\n";
        assert_eq!(text.parse::<Board>().unwrap(), example());
    }

    #[test]
    fn test_rejects_empty_board() {
        assert!(matches!("".parse::<Board>(), Err(BoardError::Empty)));
    }

    #[test]
    fn test_rejects_small_and_large_boards() {
        assert!(matches!(
            Board::from_lines(["**", "**"]),
            Err(BoardError::TooSmall { size: 2 })
        ));
        let row = "*".repeat(12);
        assert!(matches!(
            Board::from_lines(vec![row; 12]),
            Err(BoardError::TooLarge { size: 12 })
        ));
    }

    #[test]
    fn test_rejects_non_square_board() {
        let result = Board::from_lines(["***21**", "412453", "423145*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            result,
            Err(BoardError::NotSquare { row: 1, len: 6, expected: 7 })
        ));
    }

    #[test]
    fn test_rejects_invalid_character_with_position() {
        let result = Board::from_lines(["***21**", "412453*", "4231x5*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            result,
            Err(BoardError::InvalidCharacter { row: 2, col: 4, found: 'x' })
        ));
    }

    #[test]
    fn test_rejects_unresolved_on_border() {
        let result = Board::from_lines(["***2?**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            result,
            Err(BoardError::UnresolvedHint { row: 0, col: 4 })
        ));
    }

    #[test]
    fn test_rejects_hinted_corner() {
        let result = Board::from_lines(["1**21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            result,
            Err(BoardError::HintedCorner { row: 0, col: 0 })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let hint = Board::from_lines(["***21**", "612453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            hint,
            Err(BoardError::HintOutOfRange { row: 1, col: 0, hint: 6, max: 5 })
        ));

        let height = Board::from_lines(["***21**", "412463*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***"]);
        assert!(matches!(
            height,
            Err(BoardError::HeightOutOfRange { row: 1, col: 4, height: 6, max: 5 })
        ));
    }

    #[test]
    fn test_accepts_unresolved_and_empty_interior() {
        let board = Board::from_lines(["***21**", "4?????*", "4??*??*", "*?????5", "*?????*", "*?????*", "*2*1***"]).unwrap();
        assert_eq!(board.size(), 7);
        assert_eq!(board.row(2)[3], Cell::Empty);
    }
}
