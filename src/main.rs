//! # gosrcdir CLI
//!
//! This is the binary entry point for the `gosrcdir` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the resolve-and-print loop over the given repository URLs.
//! - Translating the outcome into an exit status and, on failure, a single
//!   `Cannot parse repo URL ...` line on stderr.
//!
//! The URL parsing and path derivation live in the `gosrcdir` library crate;
//! the binary is a thin wrapper around it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
