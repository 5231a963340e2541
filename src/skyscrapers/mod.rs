#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for checking skyscrapers boards.

/// Cells, lines and the bordered square board.
pub mod board;

/// Errors raised while loading a board.
pub mod error;

/// Reading boards from files, readers and directories.
pub mod loader;

/// Visibility, uniqueness and completion rules.
pub mod rules;

/// The overall verdict and the violation report.
pub mod validator;

pub use board::{Board, Cell};
pub use error::BoardError;
pub use validator::{inspect, validate, Report, Violation};
