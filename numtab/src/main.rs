//! # numtab
//!
//! Print a numeric text table as right-aligned fixed-width columns.
//!
//! ## Usage
//!
//! ```bash
//! # Read ./input.csv
//! numtab
//!
//! # Read a specific file
//! numtab data/measurements.txt
//!
//! # Show what the reader is doing
//! RUST_LOG=numtablib=debug numtab data.csv
//! ```
//!
//! The first line of the file names the columns; every other line holds one
//! number per column. Spaces, commas and newlines all separate values. On any
//! malformed line nothing is printed to stdout, an error naming the line and
//! column goes to stderr, and the exit status is non-zero.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::style;
use numtablib::{read_table, TableFormatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// File read when no path is given.
const DEFAULT_INPUT: &str = "input.csv";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("numtab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print a numeric text table as right-aligned fixed-width columns")
        .arg(
            Arg::new("file")
                .help("Table to read (defaults to input.csv in the current directory)")
                .default_value(DEFAULT_INPUT),
        )
}

/// Send diagnostics to stderr so stdout carries only the table.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_INPUT);

    let table =
        read_table(path).with_context(|| format!("failed to load table from '{path}'"))?;
    debug!(
        path,
        columns = table.column_count(),
        rows = table.row_count(),
        "table loaded"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    TableFormatter::new().write_to(&table, &mut out)?;
    out.flush()?;
    debug!("table written");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
