//! The search, extract, and output run behind the `pubfetch` command.

use pubfetch::{PubMed, Sink};

use super::*;

/// Runs `query` through search and extraction, then writes the results.
///
/// With `--debug` the query and the identifiers found are echoed before
/// extraction starts. With `--file` the records go to a CSV table and a
/// confirmation is printed; otherwise they are printed to the console.
pub async fn fetch<I: UserInteraction>(interaction: &I, cli: &Cli, pubmed: &PubMed) -> Result<()> {
  if cli.debug {
    interaction.reply(ResponseContent::Info(&format!("Searching PubMed for: {}", cli.query)))?;
  }

  let ids = pubmed.search(&cli.query).await?;
  if cli.debug {
    interaction.reply(ResponseContent::Info(&format!("Found PubMed IDs: {:?}", ids)))?;
  }

  let papers = pubmed.fetch_details(&ids).await?;
  debug!("Extracted {} papers", papers.len());

  let sink = Sink::from(cli.file.clone());
  sink.emit(&papers, &mut std::io::stdout().lock())?;

  if let Sink::File(path) = &sink {
    interaction.reply(ResponseContent::Success(&format!("Results saved to {}", path.display())))?;
  }
  Ok(())
}
