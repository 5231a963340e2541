#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use log::{debug, info, warn};
use skyscraper_checker::skyscrapers::board::Board;
use skyscraper_checker::skyscrapers::error::BoardError;
use skyscraper_checker::skyscrapers::loader::{find_board_files, read_board_file};
use skyscraper_checker::skyscrapers::validator::{inspect, validate};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the skyscraper checker.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "skyscraper-checker",
    version,
    about = "Checks completed skyscrapers puzzle boards"
)]
pub(crate) struct Cli {
    /// An optional path argument. If provided without a subcommand,
    /// it's treated as the path to a board file to check.
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check a board file, one row per line.
    File {
        /// Path to the board file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Check a board given as plain text.
    Text {
        /// Rows of the board separated by newlines, commas or spaces
        /// (e.g. "***21**,412453*,423145*,*543215,*35214*,*41532*,*2*1***").
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Check every `.sky` and `.txt` board below a directory.
    Dir {
        /// Directory to scan recursively.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output. Raises the default log filter to `debug`; `RUST_LOG` still wins.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Print timing and memory statistics after checking.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// List every broken rule instead of only the verdict.
    #[arg(short, long, default_value_t = false)]
    pub(crate) report: bool,

    /// Print the board as it was parsed.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_board: bool,
}

/// Sets up `env_logger`. `RUST_LOG` overrides the default filter.
pub(crate) fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Writes the completion script for `shell` to stdout.
pub(crate) fn print_completions(shell: clap_complete::Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

/// Checks a single board file and reports the verdict.
///
/// # Errors
///
/// If the file cannot be read or does not hold a well-formed board.
pub(crate) fn check_path(path: &Path, common: &CommonOptions) -> Result<bool, BoardError> {
    let time = Instant::now();
    let board = read_board_file(path)?;
    let parse_time = time.elapsed();

    Ok(check_and_report(&board, common, Some(path), parse_time))
}

/// Checks a board given as text and reports the verdict.
///
/// # Errors
///
/// If the text does not hold a well-formed board.
pub(crate) fn check_text(input: &str, common: &CommonOptions) -> Result<bool, BoardError> {
    let time = Instant::now();
    let board: Board = input.parse()?;
    let parse_time = time.elapsed();

    Ok(check_and_report(&board, common, None, parse_time))
}

/// Checks every board file below `path`.
///
/// A file that fails to load counts as non-compliant and does not stop the scan.
///
/// # Errors
///
/// If `path` is not a directory.
pub(crate) fn check_dir(path: &Path, common: &CommonOptions) -> Result<bool, BoardError> {
    if !path.is_dir() {
        return Err(BoardError::Io(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("Provided path is not a directory: {}", path.display()),
        )));
    }

    let files = find_board_files(path);
    info!("Found {} board file(s) in {}", files.len(), path.display());

    let mut compliant = 0;
    let mut failed = 0;
    let mut broken = 0;
    for file in &files {
        match check_path(file, common) {
            Ok(true) => compliant += 1,
            Ok(false) => failed += 1,
            Err(e) => {
                warn!("Skipping {}: {e}", file.display());
                println!("{}: ERROR ({e})", file.display());
                broken += 1;
            }
        }
    }

    println!("\n=========================[ Summary ]=========================");
    stat_line("Boards checked", files.len());
    stat_line("Compliant", compliant);
    stat_line("Non-compliant", failed);
    stat_line("Unreadable", broken);
    println!("=============================================================");

    Ok(failed == 0 && broken == 0)
}

/// Validates a parsed board and prints the verdict, plus whatever the options ask for.
///
/// # Arguments
/// * `board` - The parsed board.
/// * `common` - Options controlling the extra output.
/// * `label` - An optional label for the board (e.g. file path).
/// * `parse_time` - The time taken to read and parse the board.
pub(crate) fn check_and_report(
    board: &Board,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> bool {
    if let Some(name) = label {
        debug!("Checking: {}", name.display());
    }

    if common.print_board {
        println!("{board}\n");
    }

    let time = Instant::now();
    let compliant = validate(board);
    let elapsed = time.elapsed();

    if common.report {
        let report = inspect(board);
        debug_assert_eq!(report.is_compliant(), compliant);
        println!("{report}");
    }

    if common.stats {
        let (allocated, resident) = memory_usage_mib();
        print_stats(parse_time, elapsed, board, allocated, resident);
    }

    let verdict = if compliant { "COMPLIANT" } else { "NON-COMPLIANT" };
    match label {
        Some(name) => println!("{}: {verdict}", name.display()),
        None => println!("{verdict}"),
    }

    compliant
}

/// Allocated and resident memory in MiB, as reported by jemalloc.
///
/// Falls back to zero when the statistics are unavailable.
fn memory_usage_mib() -> (f64, f64) {
    if epoch::advance().is_err() {
        return (0.0, 0.0);
    }
    let allocated = stats::allocated::read().unwrap_or(0);
    let resident = stats::resident::read().unwrap_or(0);
    (
        allocated as f64 / (1024.0 * 1024.0),
        resident as f64 / (1024.0 * 1024.0),
    )
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>26}  |");
}

/// Prints a summary of board and timing statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent parsing the input.
/// * `elapsed` - Duration spent validating.
/// * `board` - The checked board.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    board: &Board,
    allocated: f64,
    resident: f64,
) {
    println!("\n==========================[ Board ]==========================");
    stat_line("Size", format!("{0}x{0}", board.size()));
    stat_line("Buildings per line", board.interior_size());
    stat_line("Hints", board.hint_count());
    println!("========================[ Checking ]=========================");
    stat_line("Parse time (ms)", format!("{:.3}", parse_time.as_secs_f64() * 1000.0));
    stat_line("Check time (ms)", format!("{:.3}", elapsed.as_secs_f64() * 1000.0));
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    println!("=============================================================\n");
}
