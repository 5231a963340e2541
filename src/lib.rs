#![deny(missing_docs)]
//! This crate checks completed skyscrapers puzzle boards against the rules of the puzzle.


/// The `skyscrapers` module implements the board model, the rule checks and the validator that
/// combines them into a single verdict.
pub mod skyscrapers;
