//! Endpoint and heuristic configuration.
//!
//! A [`Config`] is loaded once at startup and shared immutably by every stage.
//! All fields have defaults matching the public NCBI E-utilities service, so
//! a configuration file only needs to name the values it overrides:
//!
//! ```toml
//! search_url  = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
//! fetch_url   = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi"
//! max_results = 10
//! keywords    = ["pharma", "biotech", "inc", "corp", "gmbh", "ltd", "co.", "company"]
//! ```

use super::*;

/// Default `esearch` endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
/// Default `efetch` endpoint.
pub const DEFAULT_FETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";
/// Default upper bound on identifiers returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Default affiliation keywords marking an author as non-academic.
pub const DEFAULT_KEYWORDS: [&str; 8] =
  ["pharma", "biotech", "inc", "corp", "gmbh", "ltd", "co.", "company"];

/// Runtime configuration for a [`PubMed`](crate::PubMed) client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// URL of the identifier search endpoint
  pub search_url:  String,
  /// URL of the detail fetch endpoint
  pub fetch_url:   String,
  /// Maximum number of identifiers requested from a search
  pub max_results: usize,
  /// Lowercase substrings flagging an affiliation as non-academic
  pub keywords:    Vec<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      search_url:  DEFAULT_SEARCH_URL.to_string(),
      fetch_url:   DEFAULT_FETCH_URL.to_string(),
      max_results: DEFAULT_MAX_RESULTS,
      keywords:    DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
    }
  }
}

impl Config {
  /// Returns the platform-specific location of the configuration file.
  ///
  /// ```
  /// let path = pubfetch::Config::default_path();
  /// assert!(path.ends_with("pubfetch/config.toml") || path.ends_with("pubfetch\\config.toml"));
  /// ```
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("pubfetch").join("config.toml")
  }

  /// Parses a configuration from a TOML string.
  ///
  /// Keywords are normalized to lowercase. Blank keywords are rejected since
  /// they would flag every affiliation.
  pub fn from_toml(toml_str: &str) -> Result<Self> {
    let config: Config = toml::from_str(toml_str)?;
    config.normalized()
  }

  /// Reads and parses a configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Self::from_toml(&content)
  }

  /// Loads `path` when given, otherwise the default path if it exists, otherwise defaults.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.is_file() {
          Self::from_path(default_path)
        } else {
          trace!("No configuration at {}, using defaults", default_path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Lowercases and trims keywords, rejecting empty ones.
  fn normalized(mut self) -> Result<Self> {
    self.keywords = self
      .keywords
      .into_iter()
      .map(|kw| {
        let kw = kw.trim().to_lowercase();
        if kw.is_empty() {
          Err(PubfetchError::Config("Affiliation keywords must not be empty".to_string()))
        } else {
          Ok(kw)
        }
      })
      .collect::<Result<_>>()?;

    if self.max_results == 0 {
      return Err(PubfetchError::Config("max_results must be at least 1".to_string()));
    }
    Ok(self)
  }
}
