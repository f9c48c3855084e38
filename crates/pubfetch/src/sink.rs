//! Console and CSV output for extracted records.
//!
//! The CSV table always starts with the same header row, even when there are
//! no records:
//!
//! ```text
//! PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email
//! ```
//!
//! Absent fields are written as empty cells, and values containing a comma are
//! quoted.

use std::fs::File;

use super::*;

/// Column headers of the CSV table, in order.
pub const HEADERS: [&str; 6] = [
  "PubmedID",
  "Title",
  "Publication Date",
  "Non-academic Author(s)",
  "Company Affiliation(s)",
  "Corresponding Author Email",
];

/// Where records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
  /// Human-readable dump to the console writer
  Console,
  /// CSV table created (or overwritten) at the path
  File(PathBuf),
}

impl From<Option<PathBuf>> for Sink {
  fn from(path: Option<PathBuf>) -> Self { path.map_or(Self::Console, Self::File) }
}

/// One CSV row, borrowing from its record.
#[derive(Debug, Serialize)]
struct Row<'a> {
  /// PMID, empty cell if absent
  pubmed_id:                  Option<&'a str>,
  /// Title, empty cell if absent
  title:                      Option<&'a str>,
  /// Publication year, empty cell if absent
  publication_date:           Option<&'a str>,
  /// Flagged names, joined
  non_academic_authors:       String,
  /// Flagged affiliations, joined
  company_affiliations:       String,
  /// First email or `N/A`
  corresponding_author_email: &'a str,
}

impl<'a> From<&'a PaperRecord> for Row<'a> {
  fn from(record: &'a PaperRecord) -> Self {
    Self {
      pubmed_id:                  record.pubmed_id.as_deref(),
      title:                      record.title.as_deref(),
      publication_date:           record.publication_year.as_deref(),
      non_academic_authors:       record.non_academic_authors(),
      company_affiliations:       record.company_affiliations(),
      corresponding_author_email: &record.corresponding_author_email,
    }
  }
}

impl Sink {
  /// Writes `records` to this sink. `console` only receives output in [`Sink::Console`] mode.
  ///
  /// # Errors
  ///
  /// Returns [`PubfetchError::Path`] or [`PubfetchError::Csv`] if the output
  /// cannot be created or written.
  pub fn emit<W: Write>(&self, records: &[PaperRecord], console: &mut W) -> Result<()> {
    match self {
      Self::Console => write_console(records, console),
      Self::File(path) => write_csv_file(records, path),
    }
  }
}

/// Writes every record as a labelled block, blocks separated by a blank line.
pub fn write_console<W: Write>(records: &[PaperRecord], writer: &mut W) -> Result<()> {
  if records.is_empty() {
    writeln!(writer, "No papers found.")?;
  }
  for (i, record) in records.iter().enumerate() {
    if i > 0 {
      writeln!(writer)?;
    }
    writeln!(writer, "{record}")?;
  }
  writer.flush()?;
  Ok(())
}

/// Writes the header row and one row per record to `writer`.
pub fn write_csv<W: Write>(records: &[PaperRecord], writer: W) -> Result<()> {
  let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  wtr.write_record(HEADERS)?;
  for record in records {
    wtr.serialize(Row::from(record))?;
  }
  wtr.flush()?;
  Ok(())
}

/// Creates or overwrites `path` with the CSV table for `records`.
pub fn write_csv_file(records: &[PaperRecord], path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  debug!("Writing {} records to {}", records.len(), path.display());
  write_csv(records, File::create(path)?)
}
