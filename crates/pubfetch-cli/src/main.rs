//! Command line interface for fetching PubMed papers with industry-affiliated authors.
//!
//! The `pubfetch` binary runs one query through three stages: an identifier
//! search, a detail fetch that flags non-academic authors, and an output sink.
//!
//! # Usage
//!
//! ```bash
//! # Print matching papers to the console
//! pubfetch "cancer immunotherapy"
//!
//! # Echo the query and identifiers, then save a CSV table
//! pubfetch "cancer immunotherapy" --debug --file results.csv
//!
//! # Use custom endpoints or keywords
//! pubfetch "crispr" --config ./pubfetch.toml
//! ```
//!
//! Logging goes to stderr and is controlled by repeated `-v` flags or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Parser};
use pubfetch::{Config, PubMed};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod fetch;
pub mod interaction;

use crate::{error::*, fetch::fetch, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch PubMed papers and flag authors with company affiliations")]
pub struct Cli {
  /// PubMed search query, passed through unmodified
  query: String,

  /// Print the query and the PubMed IDs found before fetching details
  #[arg(short, long)]
  debug: bool,

  /// Save results to this CSV file instead of printing them
  #[arg(short, long)]
  file: Option<PathBuf>,

  /// Configuration file for endpoints and affiliation keywords. Defaults to the
  /// platform config directory when present.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the pubfetch CLI application
///
/// # Errors
///
/// Returns [`PubfetchCliError`] when configuration loading, either network
/// call, XML parsing, or writing the output fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);
  trace!("Parsed arguments: {:?}", cli);

  let config = Config::load(cli.config.as_deref())?;
  debug!("Using configuration: {:?}", config);

  fetch(&Terminal, &cli, &PubMed::new(config)).await
}
