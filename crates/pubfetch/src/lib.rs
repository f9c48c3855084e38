//! PubMed paper retrieval with industry-affiliation detection.
//!
//! `pubfetch` is a small library that runs a PubMed query end to end:
//!
//! - Identifier search through the E-utilities `esearch` endpoint
//! - Detail extraction through the `efetch` endpoint, parsed from PubMed XML
//! - A keyword heuristic flagging authors affiliated with companies
//! - Output either to the console or to a CSV table
//!
//! # Getting Started
//!
//! ```no_run
//! use pubfetch::{prelude::*, Config, PubMed, Sink};
//!
//! # async fn example() -> Result<(), PubfetchError> {
//! let pubmed = PubMed::new(Config::default());
//!
//! let ids = pubmed.search("cancer immunotherapy").await?;
//! let papers = pubmed.fetch_details(&ids).await?;
//!
//! Sink::File("results.csv".into()).emit(&papers, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: HTTP access to the search and detail endpoints
//! - [`parser`]: PubMed XML to [`PaperRecord`] extraction
//! - [`heuristic`]: Non-academic affiliation and email detection
//! - [`record`]: The output record and its single-pass builder
//! - [`sink`]: Console and CSV output
//! - [`config`]: Endpoint and keyword configuration
//! - [`error`]: Error taxonomy shared by every stage

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  io::Write,
  path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub mod client;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod parser;
pub mod record;
pub mod sink;

pub use crate::{
  client::PubMed,
  config::Config,
  heuristic::AffiliationClassifier,
  record::{IndustryAuthor, PaperRecord, PaperRecordBuilder},
  sink::Sink,
};
use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use pubfetch::{prelude::*, Config, PubMed};
///
/// async fn example() -> Result<(), PubfetchError> {
///   let ids = PubMed::new(Config::default()).search("crispr").await?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::error::PubfetchError;
}
