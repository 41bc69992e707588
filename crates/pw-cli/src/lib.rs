//! Command-line front end: argument parsing, file I/O and the batch run.

pub mod app;
pub mod args;

pub use app::{run, RunSummary};
pub use args::Cli;
