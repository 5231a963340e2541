//! # skyscraper-checker
//!
//! `skyscraper-checker` is a command-line checker for completed skyscrapers puzzle boards.
//!
//! A board is a square grid of `N` rows of `N` characters. The outer ring holds the hints,
//! the inside holds the buildings:
//!
//! ```text
//! ***21**
//! 412453*
//! 423145*
//! *543215
//! *35214*
//! *41532*
//! *2*1***
//! ```
//!
//! -   `1`-`9`: a building height inside the grid, a hint on the border.
//! -   `?`: a cell that has not been filled in yet.
//! -   `*`: no hint on the border, no building inside the grid.
//!
//! A board is compliant when it has no `?` left, no height repeats within a row or a column,
//! and every hint equals the number of buildings visible from its side.
//!
//! ## Usage
//!
//! ```sh
//! skyscraper-checker [OPTIONS] [PATH] [SUBCOMMAND]
//! ```
//!
//! -   `path`: If provided without a subcommand, it's treated as a board file to check.
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Check a board file.
//!     ```sh
//!     skyscraper-checker file --path <board_file> [OPTIONS]
//!     ```
//!
//! 2.  **`text`**: Check a board given inline, rows separated by commas, spaces or newlines.
//!     ```sh
//!     skyscraper-checker text --input "***,*1*,***"
//!     ```
//!
//! 3.  **`dir`**: Check every `.sky` and `.txt` file below a directory.
//!     ```sh
//!     skyscraper-checker dir --path <directory>
//!     ```
//!
//! 4.  **`completions`**: Print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Debug logging (`RUST_LOG` takes precedence).
//! -   `-s, --stats`: Print timing and memory statistics.
//! -   `-r, --report`: List every broken rule.
//! -   `-p, --print-board`: Print the parsed board.
//!
//! ## Exit status
//!
//! `0` when every checked board is compliant, `1` when one is not, `2` when a board
//! cannot be read or is malformed.

use crate::command_line::cli::{
    check_dir, check_path, check_text, init_logging, print_completions, Cli, Commands,
};
use clap::Parser;
use log::error;
use std::process::ExitCode;

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory statistics.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug = match &cli.command {
        Some(
            Commands::File { common, .. }
            | Commands::Text { common, .. }
            | Commands::Dir { common, .. },
        ) => common.debug || cli.common.debug,
        Some(Commands::Completions { .. }) | None => cli.common.debug,
    };
    init_logging(debug);

    let result = match cli.command {
        Some(Commands::File { path, common }) => check_path(&path, &common),
        Some(Commands::Text { input, common }) => check_text(&input, &common),
        Some(Commands::Dir { path, common }) => check_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            print_completions(shell);
            return ExitCode::SUCCESS;
        }
        None => {
            let Some(path) = cli.path else {
                eprintln!("No board given. Pass a path or use --help.");
                return ExitCode::from(2);
            };
            check_path(&path, &cli.common)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
