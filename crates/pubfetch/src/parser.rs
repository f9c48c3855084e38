//! PubMed `efetch` XML parsing.
//!
//! The parser streams over `quick-xml` events, keeping a stack of open element
//! names. Every `PubmedArticle` becomes one [`PaperRecord`]. Inside an article
//! it picks out:
//!
//! - the first `PMID`
//! - the first `ArticleTitle`
//! - the first `Year` directly under a `PubDate`
//! - every `Author`, with its direct `LastName` and `ForeName` children and the
//!   first `Affiliation` beneath it
//!
//! Names, identifiers, titles and years are trimmed. Affiliation text is kept
//! exactly as written, since it is reported verbatim.
//!
//! Missing elements leave the field absent. Only malformed XML fails the parse.

use quick_xml::{
  events::{BytesStart, Event},
  Reader,
};

use super::*;

/// Element delimiting one document entry.
const PUBMED_ARTICLE: &[u8] = b"PubmedArticle";

/// Text fields collected while walking an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
  /// First `PMID` in the article
  Pmid,
  /// First `ArticleTitle`
  Title,
  /// `Year` under `PubDate`
  Year,
  /// Author's direct `LastName`
  LastName,
  /// Author's direct `ForeName`
  ForeName,
  /// First `Affiliation` under the author
  Affiliation,
}

/// Text being gathered for an open element.
#[derive(Debug)]
struct Capture {
  /// Which field receives the text
  field: Field,
  /// Stack depth of the element being captured
  depth: usize,
  /// All text seen inside the element so far, nested markup flattened
  text:  String,
}

/// Author currently open inside an article.
#[derive(Debug, Default)]
struct AuthorState {
  /// Stack depth of the `Author` element
  depth:       usize,
  /// Trimmed `ForeName`
  first_name:  Option<String>,
  /// Trimmed `LastName`
  last_name:   Option<String>,
  /// Raw `Affiliation` text
  affiliation: Option<String>,
}

/// Everything gathered for the article currently open.
#[derive(Debug, Default)]
struct ArticleState {
  /// Stack depth of the `PubmedArticle` element
  depth:            usize,
  /// First PMID
  pubmed_id:        Option<String>,
  /// First title
  title:            Option<String>,
  /// Year under the journal issue's `PubDate`
  publication_year: Option<String>,
  /// Completed authors, in document order
  authors:          Vec<AuthorState>,
  /// Author element currently open, if any
  author:           Option<AuthorState>,
  /// Fields whose elements are open, innermost last
  captures:         Vec<Capture>,
}

impl ArticleState {
  /// Starts an article whose element sits at `depth`.
  fn new(depth: usize) -> Self { Self { depth, ..Default::default() } }

  /// Where a finished capture of `field` is stored, if it has a home right now.
  fn slot(&mut self, field: Field) -> Option<&mut Option<String>> {
    match field {
      Field::Pmid => Some(&mut self.pubmed_id),
      Field::Title => Some(&mut self.title),
      Field::Year => Some(&mut self.publication_year),
      Field::LastName => self.author.as_mut().map(|a| &mut a.last_name),
      Field::ForeName => self.author.as_mut().map(|a| &mut a.first_name),
      Field::Affiliation => self.author.as_mut().map(|a| &mut a.affiliation),
    }
  }

  /// Handles an element opening at `depth` inside the article.
  fn open(&mut self, name: &[u8], parent: Option<&[u8]>, depth: usize) {
    let is_author_child =
      parent == Some(b"Author".as_slice()) && self.author.as_ref().is_some_and(|a| a.depth + 1 == depth);

    let field = match name {
      b"PMID" => Field::Pmid,
      b"ArticleTitle" => Field::Title,
      b"Year" if parent == Some(b"PubDate".as_slice()) => Field::Year,
      b"LastName" if is_author_child => Field::LastName,
      b"ForeName" if is_author_child => Field::ForeName,
      b"Affiliation" => Field::Affiliation,
      b"Author" => {
        if self.author.is_none() {
          self.author = Some(AuthorState { depth, ..Default::default() });
        }
        return;
      },
      _ => return,
    };

    // Only the first occurrence of each field counts.
    let already_capturing = self.captures.iter().any(|c| c.field == field);
    if !already_capturing && self.slot(field).is_some_and(|slot| slot.is_none()) {
      self.captures.push(Capture { field, depth, text: String::new() });
    }
  }

  /// Appends text to every open capture.
  fn text(&mut self, text: &str) {
    for capture in &mut self.captures {
      capture.text.push_str(text);
    }
  }

  /// Handles the element at `depth` closing, storing any capture it ends.
  fn close(&mut self, depth: usize) {
    if let Some(pos) = self.captures.iter().position(|c| c.depth == depth) {
      let Capture { field, text, .. } = self.captures.remove(pos);
      let value = match field {
        Field::Affiliation => text,
        _ => text.trim().to_string(),
      };
      if let Some(slot) = self.slot(field) {
        if slot.is_none() {
          *slot = Some(value);
        }
      }
    }

    if self.author.as_ref().is_some_and(|a| a.depth == depth) {
      self.authors.extend(self.author.take());
    }
  }

  /// Turns the gathered fields and authors into a record.
  fn finish(self, classifier: &AffiliationClassifier) -> PaperRecord {
    if self.pubmed_id.is_none() {
      warn!("PubmedArticle without a PMID, keeping it with an empty identifier");
    }

    self
      .authors
      .iter()
      .fold(
        PaperRecordBuilder::new(classifier)
          .pubmed_id(self.pubmed_id)
          .title(self.title)
          .publication_year(self.publication_year),
        |builder, author| {
          builder.author(
            author.first_name.as_deref(),
            author.last_name.as_deref(),
            author.affiliation.as_deref().unwrap_or(""),
          )
        },
      )
      .build()
  }
}

/// Parses an `efetch` response into one record per `PubmedArticle`, in document order.
///
/// # Errors
///
/// Returns [`PubfetchError::Parse`] when the document is not well-formed: a
/// syntax error, mismatched or unclosed elements, an unknown entity, a
/// duplicate or malformed attribute, no root element, more than one root
/// element, or text outside the root element.
///
/// # Examples
///
/// ```
/// use pubfetch::{parser::parse_articles, AffiliationClassifier};
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle><MedlineCitation><PMID>1</PMID></MedlineCitation></PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let papers = parse_articles(xml, &AffiliationClassifier::default())?;
/// assert_eq!(papers[0].pubmed_id.as_deref(), Some("1"));
/// # Ok::<(), pubfetch::error::PubfetchError>(())
/// ```
pub fn parse_articles(xml: &str, classifier: &AffiliationClassifier) -> Result<Vec<PaperRecord>> {
  let mut reader = Reader::from_str(xml);
  let mut stack: Vec<Vec<u8>> = Vec::new();
  let mut root_closed = false;
  let mut article: Option<ArticleState> = None;
  let mut papers = Vec::new();

  loop {
    let event = match reader.read_event() {
      Ok(event) => event,
      Err(e) =>
        return Err(PubfetchError::Parse(format!("{} at position {}", e, reader.buffer_position()))),
    };

    match event {
      Event::Start(e) => {
        check_element(&e, root_closed)?;
        open_element(e.name().as_ref(), &mut stack, &mut article);
      },
      Event::Empty(e) => {
        check_element(&e, root_closed)?;
        open_element(e.name().as_ref(), &mut stack, &mut article);
        close_element(&mut stack, &mut article, &mut papers, classifier);
        root_closed = stack.is_empty();
      },
      Event::End(e) => {
        if stack.is_empty() {
          return Err(PubfetchError::Parse(format!(
            "unexpected </{}> outside the root element",
            String::from_utf8_lossy(e.name().as_ref())
          )));
        }
        close_element(&mut stack, &mut article, &mut papers, classifier);
        root_closed = stack.is_empty();
      },
      Event::Text(e) => {
        let text = e.unescape()?;
        check_text(&stack, &text)?;
        if let Some(state) = article.as_mut() {
          state.text(&text);
        }
      },
      Event::CData(e) => {
        let text = String::from_utf8_lossy(&e);
        check_text(&stack, &text)?;
        if let Some(state) = article.as_mut() {
          state.text(&text);
        }
      },
      Event::Eof => break,
      _ => (),
    }
  }

  if let Some(open) = stack.last() {
    return Err(PubfetchError::Parse(format!(
      "unexpected end of document, <{}> is not closed",
      String::from_utf8_lossy(open)
    )));
  }
  if !root_closed {
    return Err(PubfetchError::Parse("document has no root element".to_string()));
  }

  debug!("Parsed {} articles", papers.len());
  Ok(papers)
}

/// Rejects a second root element and duplicate or malformed attributes.
fn check_element(start: &BytesStart, root_closed: bool) -> Result<()> {
  if root_closed {
    return Err(PubfetchError::Parse(format!(
      "<{}> after the root element was closed",
      String::from_utf8_lossy(start.name().as_ref())
    )));
  }
  for attr in start.attributes() {
    attr.map_err(|e| PubfetchError::Parse(e.to_string()))?;
  }
  Ok(())
}

/// Rejects non-whitespace text outside the root element.
fn check_text(stack: &[Vec<u8>], text: &str) -> Result<()> {
  if stack.is_empty() && !text.trim().is_empty() {
    return Err(PubfetchError::Parse(format!("text outside the root element: {:?}", text.trim())));
  }
  Ok(())
}

/// Pushes an element, starting an article or feeding the open one.
fn open_element(name: &[u8], stack: &mut Vec<Vec<u8>>, article: &mut Option<ArticleState>) {
  let depth = stack.len() + 1;
  if let Some(state) = article.as_mut() {
    state.open(name, stack.last().map(Vec::as_slice), depth);
  } else if name == PUBMED_ARTICLE {
    *article = Some(ArticleState::new(depth));
  }
  stack.push(name.to_vec());
}

/// Pops the innermost element, finishing the article it closes if any.
fn close_element(
  stack: &mut Vec<Vec<u8>>,
  article: &mut Option<ArticleState>,
  papers: &mut Vec<PaperRecord>,
  classifier: &AffiliationClassifier,
) {
  let depth = stack.len();
  stack.pop();

  if article.as_ref().is_some_and(|state| state.depth == depth) {
    if let Some(state) = article.take() {
      papers.push(state.finish(classifier));
    }
  } else if let Some(state) = article.as_mut() {
    state.close(depth);
  }
}
