/// Command-line parsing and the reporting around each check.
pub(crate) mod cli;
