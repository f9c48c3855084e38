//! Error types for the pubfetch command line interface.

use pubfetch::error::PubfetchError;
use thiserror::Error;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, PubfetchCliError>;

/// Failures surfaced to the user. Any of these ends the run with a non-zero exit.
#[derive(Error, Debug)]
pub enum PubfetchCliError {
  /// A search, extraction, or output stage failed.
  #[error(transparent)]
  Pubfetch(#[from] PubfetchError),

  /// Writing to the terminal failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
