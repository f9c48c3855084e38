//! HTTP access to the PubMed E-utilities.
//!
//! A [`PubMed`] client runs the two network stages of a query:
//!
//! 1. [`PubMed::search`] asks `esearch` for up to `max_results` identifiers
//! 2. [`PubMed::fetch_details`] asks `efetch` for every identifier at once and
//!    parses the XML into [`PaperRecord`]s
//!
//! Calls are made one at a time with no retries; any failure is returned to the
//! caller unchanged.
//!
//! # Examples
//!
//! ```no_run
//! use pubfetch::{Config, PubMed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pubmed = PubMed::new(Config::default());
//! let ids = pubmed.search("cancer immunotherapy").await?;
//! for paper in pubmed.fetch_details(&ids).await? {
//!   println!("{paper}");
//! }
//! # Ok(())
//! # }
//! ```

use super::*;

/// Shape of an `esearch` JSON response, reduced to the fields used.
#[derive(Debug, Deserialize)]
struct SearchResponse {
  /// Result envelope
  esearchresult: SearchResult,
}

/// The `esearchresult` object.
#[derive(Debug, Deserialize)]
struct SearchResult {
  /// Matching identifiers, in relevance order
  idlist: Vec<String>,
}

/// Client for the PubMed search and fetch endpoints.
#[derive(Debug, Clone)]
pub struct PubMed {
  /// Underlying HTTP client
  client:     reqwest::Client,
  /// Endpoint URLs, result bound, and heuristic keywords
  config:     Config,
  /// Classifier built from `config.keywords`
  classifier: AffiliationClassifier,
}

impl Default for PubMed {
  fn default() -> Self { Self::new(Config::default()) }
}

impl PubMed {
  /// Creates a client for the endpoints in `config`.
  pub fn new(config: Config) -> Self {
    let classifier = AffiliationClassifier::from(&config);
    Self { client: reqwest::Client::new(), config, classifier }
  }

  /// Searches PubMed and returns matching identifiers in the order received.
  ///
  /// The query is forwarded verbatim, including an empty one. Duplicates from
  /// the remote are kept.
  ///
  /// # Errors
  ///
  /// - [`PubfetchError::Network`] if the request fails or returns a non-success status
  /// - [`PubfetchError::Format`] if the body has no `esearchresult.idlist`
  pub async fn search(&self, query: &str) -> Result<Vec<String>> {
    debug!("Searching {} for {:?}", self.config.search_url, query);

    let max_results = self.config.max_results.to_string();
    let response = self
      .client
      .get(&self.config.search_url)
      .query(&[("db", "pubmed"), ("term", query), ("retmode", "json"), ("retmax", max_results.as_str())])
      .send()
      .await?
      .error_for_status()?;
    let data = response.bytes().await?;

    trace!("esearch response: {}", String::from_utf8_lossy(&data));

    let parsed: SearchResponse =
      serde_json::from_slice(&data).map_err(|e| PubfetchError::Format(e.to_string()))?;
    debug!("Search returned {} identifiers", parsed.esearchresult.idlist.len());
    Ok(parsed.esearchresult.idlist)
  }

  /// Fetches full records for `ids` in a single request.
  ///
  /// An empty `ids` returns an empty list without touching the network.
  ///
  /// # Errors
  ///
  /// - [`PubfetchError::Network`] if the request fails or returns a non-success status
  /// - [`PubfetchError::Parse`] if the body is not well-formed XML
  pub async fn fetch_details<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<PaperRecord>> {
    if ids.is_empty() {
      debug!("No identifiers to fetch");
      return Ok(Vec::new());
    }

    let id = ids.iter().map(|id| id.as_ref()).collect::<Vec<_>>().join(",");
    debug!("Fetching {} records from {}", ids.len(), self.config.fetch_url);

    let response = self
      .client
      .get(&self.config.fetch_url)
      .query(&[("db", "pubmed"), ("id", id.as_str()), ("retmode", "xml")])
      .send()
      .await?
      .error_for_status()?;
    let data = response.bytes().await?;

    trace!("efetch response: {}", String::from_utf8_lossy(&data));

    parser::parse_articles(&String::from_utf8_lossy(&data), &self.classifier)
  }
}
