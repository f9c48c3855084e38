use super::*;

async fn fetched_papers() -> TestResult<Vec<PaperRecord>> {
  let mut server = mockito::Server::new_async().await;
  let _mock = mock_fetch(&mut server, "38000001,38000002", 200, EFETCH_BODY).await;
  Ok(PubMed::new(mock_config(&server)).fetch_details(&["38000001", "38000002"]).await?)
}

#[tokio::test]
async fn test_csv_round_trip() -> TestResult<()> {
  let papers = fetched_papers().await?;
  let dir = tempdir()?;
  let path = dir.path().join("papers.csv");

  Sink::File(path.clone()).emit(&papers, &mut std::io::sink())?;

  let mut reader = csv::Reader::from_path(&path)?;
  let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
  assert_eq!(headers, vec![
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
  ]);

  let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
  assert_eq!(rows.len(), papers.len());

  assert_eq!(&rows[0][0], "38000001");
  assert_eq!(&rows[0][3], "John Smith, Jane Doe");
  assert_eq!(
    &rows[0][4],
    "Dept. of Oncology, Pfizer Inc., New York, contact: jane.doe@biotechcorp.com"
  );
  assert_eq!(&rows[0][5], "jane.doe@biotechcorp.com");

  assert_eq!(&rows[1][1], "An editorial without authors.");
  assert_eq!(&rows[1][2], "");
  assert_eq!(&rows[1][5], "N/A");
  Ok(())
}

#[tokio::test]
async fn test_file_sink_overwrites() -> TestResult<()> {
  let papers = fetched_papers().await?;
  let dir = tempdir()?;
  let path = dir.path().join("papers.csv");
  std::fs::write(&path, "stale contents\nthat should vanish\n")?;

  Sink::File(path.clone()).emit(&papers[1..], &mut std::io::sink())?;

  let contents = std::fs::read_to_string(&path)?;
  assert!(!contents.contains("stale"));
  assert_eq!(contents.lines().count(), 2);
  Ok(())
}

#[test]
fn test_unwritable_path_is_io_error() -> TestResult<()> {
  let dir = tempdir()?;
  let path = dir.path().join("missing").join("papers.csv");

  let result = Sink::File(path).emit(&[], &mut std::io::sink());
  assert!(matches!(result, Err(PubfetchError::Path(_))));
  Ok(())
}

#[test]
fn test_file_sink_leaves_console_untouched() -> TestResult<()> {
  let dir = tempdir()?;
  let mut console = Vec::new();

  Sink::File(dir.path().join("papers.csv")).emit(&[], &mut console)?;
  assert!(console.is_empty());
  Ok(())
}
