#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reading boards from files and other text sources.
//!
//! A board file holds one row per line, `N` lines of `N` characters each.
//! Line terminators (`\n` or `\r\n`) are dropped and blank lines are ignored,
//! so a trailing newline at the end of the file is harmless.

use crate::skyscrapers::board::Board;
use crate::skyscrapers::error::BoardError;
use crate::skyscrapers::validator::validate;
use log::debug;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions picked up when scanning a directory for boards.
pub const BOARD_EXTENSIONS: [&str; 2] = ["sky", "txt"];

/// Reads the non-blank lines of `reader`, without their terminators.
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .filter(|line| !line.as_ref().is_ok_and(|l| l.trim_end().is_empty()))
        .collect()
}

/// Parses a board from any buffered reader.
///
/// # Errors
///
/// `BoardError::Io` if reading fails, otherwise any structural error of the board.
pub fn read_board<R: BufRead>(reader: R) -> Result<Board, BoardError> {
    let lines = read_lines(reader)?;
    Board::try_from(lines)
}

/// Parses the board stored at `path`.
///
/// # Errors
///
/// `BoardError::Io` if the file cannot be opened or read, otherwise any
/// structural error of the board.
pub fn read_board_file(path: &Path) -> Result<Board, BoardError> {
    debug!("Reading board from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_board(io::BufReader::new(file))
}

/// Reads the board at `path` and tells whether it follows the rules.
///
/// # Errors
///
/// Only when the board cannot be loaded; a rule violation is `Ok(false)`.
pub fn check_file(path: &Path) -> Result<bool, BoardError> {
    let board = read_board_file(path)?;
    Ok(validate(&board))
}

/// Recursively collects the board files below `dir`, sorted by path.
///
/// Entries that cannot be read are skipped.
#[must_use]
pub fn find_board_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| BOARD_EXTENSIONS.contains(&ext))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skyscrapers::board::EXAMPLE_SEVEN;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_strips_terminators() {
        let reader = Cursor::new("***21**\r\n412453*\n\n423145*\n");
        let lines = read_lines(reader).unwrap();
        assert_eq!(lines, vec!["***21**", "412453*", "423145*"]);
    }

    #[test]
    fn test_read_board_from_reader() {
        let text = EXAMPLE_SEVEN.join("\n") + "\n";
        let board = read_board(Cursor::new(text)).unwrap();
        assert_eq!(board.size(), 7);
        assert!(validate(&board));
    }

    #[test]
    fn test_read_board_rejects_ragged_rows() {
        let reader = Cursor::new("***21**\n412453\n");
        assert!(matches!(
            read_board(reader),
            Err(BoardError::TooSmall { size: 2 })
        ));

        let reader = Cursor::new("****\n*12*\n*21\n****\n");
        assert!(matches!(
            read_board(reader),
            Err(BoardError::NotSquare { row: 2, len: 3, expected: 4 })
        ));
    }

    #[test]
    fn test_read_board_file_missing() {
        let path = std::env::temp_dir().join("skyscraper-checker-missing-board.sky");
        assert!(matches!(read_board_file(&path), Err(BoardError::Io(_))));
    }

    #[test]
    fn test_check_file_and_directory_scan() {
        let dir = std::env::temp_dir().join(format!("skyscraper-checker-{}", std::process::id()));
        let nested = dir.join("nested");
        std::fs::create_dir_all(&nested).unwrap();

        let good = dir.join("good.sky");
        let bad = nested.join("bad.txt");
        let ignored = dir.join("notes.md");
        std::fs::write(&good, EXAMPLE_SEVEN.join("\n")).unwrap();
        std::fs::write(
            &bad,
            "***21**\n452453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***\n",
        )
        .unwrap();
        std::fs::write(&ignored, "not a board").unwrap();

        assert!(check_file(&good).unwrap());
        assert!(!check_file(&bad).unwrap());
        assert_eq!(find_board_files(&dir), vec![good, bad]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
