//! Error types for the pubfetch library.
//!
//! Every stage of a run reports failures through [`PubfetchError`]:
//! - Network and HTTP status failures at either endpoint
//! - Search responses missing the identifier list
//! - Detail responses that are not well-formed XML
//! - Output files that cannot be created or written
//! - Configuration files that cannot be read or are invalid
//!
//! None of these are recovered inside the library. Partial article data is
//! never an error: missing fields simply come back absent.
//!
//! # Examples
//!
//! ```no_run
//! use pubfetch::{error::PubfetchError, Config, PubMed};
//!
//! # async fn example() -> Result<(), PubfetchError> {
//! match PubMed::new(Config::default()).search("crispr").await {
//!   Err(PubfetchError::Network(e)) => println!("Network error: {}", e),
//!   Err(PubfetchError::Format(msg)) => println!("Unexpected search response: {}", msg),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(ids) => println!("Found {} papers", ids.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubfetch`](crate) crate.
pub type Result<T> = core::result::Result<T, PubfetchError>;

/// Errors that can occur while searching, extracting, or writing papers.
#[derive(Error, Debug)]
pub enum PubfetchError {
  /// A request to the search or detail endpoint failed.
  ///
  /// This covers connection failures, TLS errors, and any non-success HTTP
  /// status returned by the remote.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The search response could not be decoded into an identifier list.
  #[error("Unexpected search response format: {0}")]
  Format(String),

  /// The detail response is not well-formed XML.
  #[error("Failed to parse PubMed XML: {0}")]
  Parse(String),

  /// A file system operation failed.
  ///
  /// This occurs when the output file cannot be created or written, or when
  /// a configuration file cannot be read.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// Writing the CSV table failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value is out of range, such as a blank keyword or a
  /// zero result bound.
  #[error("{0}")]
  Config(String),
}

impl From<quick_xml::Error> for PubfetchError {
  fn from(e: quick_xml::Error) -> Self { Self::Parse(e.to_string()) }
}
