//! Output records and their single-pass builder.
//!
//! A [`PaperRecord`] is produced once per `PubmedArticle` and never mutated
//! afterward. Flagged authors are stored as name/affiliation pairs so the two
//! output columns built from them always line up position by position.

use super::*;

/// Sentinel written when no author affiliation carries an email address.
pub const NO_EMAIL: &str = "N/A";

/// Separator used when joining author names and affiliations into one cell.
pub const JOIN_SEPARATOR: &str = ", ";

/// An author whose affiliation matched the non-academic heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryAuthor {
  /// "First Last", trimmed
  pub name:        String,
  /// Raw affiliation text that matched
  pub affiliation: String,
}

/// Structured metadata for one PubMed article.
///
/// # Examples
///
/// ```
/// use pubfetch::{AffiliationClassifier, PaperRecordBuilder};
///
/// let classifier = AffiliationClassifier::default();
/// let record = PaperRecordBuilder::new(&classifier)
///   .pubmed_id(Some("12345".to_string()))
///   .author(Some("Jane"), Some("Doe"), "Acme Biotech, contact: jane@acme.com")
///   .build();
///
/// assert_eq!(record.non_academic_authors(), "Jane Doe");
/// assert_eq!(record.corresponding_author_email, "jane@acme.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
  /// PubMed identifier (PMID)
  pub pubmed_id:                  Option<String>,
  /// Article title
  pub title:                      Option<String>,
  /// Year from the journal issue's publication date
  pub publication_year:           Option<String>,
  /// Authors flagged as non-academic, in document order
  pub industry_authors:           Vec<IndustryAuthor>,
  /// First email found in any affiliation, or [`NO_EMAIL`]
  pub corresponding_author_email: String,
}

impl PaperRecord {
  /// Flagged author names joined into one comma-separated string.
  pub fn non_academic_authors(&self) -> String {
    self.industry_authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(JOIN_SEPARATOR)
  }

  /// Flagged affiliations joined into one comma-separated string.
  pub fn company_affiliations(&self) -> String {
    self
      .industry_authors
      .iter()
      .map(|a| a.affiliation.as_str())
      .collect::<Vec<_>>()
      .join(JOIN_SEPARATOR)
  }
}

impl Display for PaperRecord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "PubmedID: {}", self.pubmed_id.as_deref().unwrap_or_default())?;
    writeln!(f, "Title: {}", self.title.as_deref().unwrap_or_default())?;
    writeln!(f, "Publication Date: {}", self.publication_year.as_deref().unwrap_or_default())?;
    writeln!(f, "Non-academic Author(s): {}", self.non_academic_authors())?;
    writeln!(f, "Company Affiliation(s): {}", self.company_affiliations())?;
    write!(f, "Corresponding Author Email: {}", self.corresponding_author_email)
  }
}

/// Accumulates one article's fields and authors, then yields a [`PaperRecord`].
///
/// Authors are fed in document order. Each one is classified as it arrives,
/// and only the first email found across all affiliations is kept.
#[derive(Debug)]
pub struct PaperRecordBuilder<'a> {
  /// Heuristic applied to each author's affiliation
  classifier:       &'a AffiliationClassifier,
  /// PMID seen so far
  pubmed_id:        Option<String>,
  /// Title seen so far
  title:            Option<String>,
  /// Publication year seen so far
  publication_year: Option<String>,
  /// Flagged authors
  industry_authors: Vec<IndustryAuthor>,
  /// First email found
  email:            Option<String>,
}

impl<'a> PaperRecordBuilder<'a> {
  /// Starts an empty record classified by `classifier`.
  pub fn new(classifier: &'a AffiliationClassifier) -> Self {
    Self {
      classifier,
      pubmed_id: None,
      title: None,
      publication_year: None,
      industry_authors: Vec::new(),
      email: None,
    }
  }

  /// Sets the PMID.
  pub fn pubmed_id(mut self, pubmed_id: Option<String>) -> Self {
    self.pubmed_id = pubmed_id;
    self
  }

  /// Sets the title.
  pub fn title(mut self, title: Option<String>) -> Self {
    self.title = title;
    self
  }

  /// Sets the publication year.
  pub fn publication_year(mut self, publication_year: Option<String>) -> Self {
    self.publication_year = publication_year;
    self
  }

  /// Adds an author.
  ///
  /// A missing last name becomes "Unknown" and a missing first name becomes
  /// empty, so an author with neither is named "Unknown".
  pub fn author(mut self, first_name: Option<&str>, last_name: Option<&str>, affiliation: &str) -> Self {
    let name = format!("{} {}", first_name.unwrap_or(""), last_name.unwrap_or("Unknown"))
      .trim()
      .to_string();

    if self.classifier.is_non_academic(affiliation) {
      trace!("Flagged non-academic author {}: {}", name, affiliation);
      self.industry_authors.push(IndustryAuthor { name, affiliation: affiliation.to_string() });
    }

    if self.email.is_none() {
      self.email = heuristic::extract_email(affiliation).map(String::from);
    }
    self
  }

  /// Finishes the record.
  pub fn build(self) -> PaperRecord {
    PaperRecord {
      pubmed_id:                  self.pubmed_id,
      title:                      self.title,
      publication_year:           self.publication_year,
      industry_authors:           self.industry_authors,
      corresponding_author_email: self.email.unwrap_or_else(|| NO_EMAIL.to_string()),
    }
  }
}
