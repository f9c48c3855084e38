use super::*;

fn by_id<'a>(papers: &'a [PaperRecord], id: &str) -> &'a PaperRecord {
  papers.iter().find(|p| p.pubmed_id.as_deref() == Some(id)).unwrap()
}

#[tokio::test]
async fn test_fetch_details_extracts_records() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let mock = mock_fetch(&mut server, "38000001,38000002", 200, EFETCH_BODY).await;

  let pubmed = PubMed::new(mock_config(&server));
  let papers = pubmed.fetch_details(&["38000001", "38000002"]).await?;
  mock.assert_async().await;

  assert_eq!(papers.len(), 2);
  assert_eq!(papers[0].pubmed_id.as_deref(), Some("38000001"));
  assert_eq!(papers[1].pubmed_id.as_deref(), Some("38000002"));

  let industry = by_id(&papers, "38000001");
  assert_eq!(industry.title.as_deref(), Some("PD-1 blockade in solid tumors."));
  assert_eq!(industry.publication_year.as_deref(), Some("2023"));
  assert_eq!(industry.non_academic_authors(), "John Smith, Jane Doe");
  assert_eq!(
    industry.company_affiliations(),
    "Dept. of Oncology, Pfizer Inc., New York, contact: jane.doe@biotechcorp.com"
  );
  assert_eq!(industry.corresponding_author_email, "jane.doe@biotechcorp.com");

  let editorial = by_id(&papers, "38000002");
  assert_eq!(editorial.publication_year, None);
  assert_eq!(editorial.non_academic_authors(), "");
  assert_eq!(editorial.company_affiliations(), "");
  assert_eq!(editorial.corresponding_author_email, "N/A");
  Ok(())
}

#[tokio::test]
async fn test_empty_ids_make_no_request() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

  let papers = PubMed::new(mock_config(&server)).fetch_details::<String>(&[]).await?;

  assert!(papers.is_empty());
  mock.assert_async().await;
  Ok(())
}

#[tokio::test]
async fn test_fetch_malformed_xml_is_parse_error() {
  let mut server = mockito::Server::new_async().await;
  let _mock =
    mock_fetch(&mut server, "1", 200, "<PubmedArticleSet><PubmedArticle></PubmedArticleSet>")
      .await;

  let result = PubMed::new(mock_config(&server)).fetch_details(&["1"]).await;
  assert!(matches!(result, Err(PubfetchError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_non_success_status_is_network_error() {
  let mut server = mockito::Server::new_async().await;
  let _mock = mock_fetch(&mut server, "1", 429, "Too Many Requests").await;

  let result = PubMed::new(mock_config(&server)).fetch_details(&["1"]).await;
  assert!(matches!(result, Err(PubfetchError::Network(_))));
}

#[tokio::test]
async fn test_custom_keywords_drive_classification() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let _mock = mock_fetch(&mut server, "38000001,38000002", 200, EFETCH_BODY).await;

  let config = Config { keywords: vec!["universidad".to_string()], ..mock_config(&server) };
  let papers = PubMed::new(config).fetch_details(&["38000001", "38000002"]).await?;

  assert_eq!(papers[0].non_academic_authors(), "Maria Garcia");
  assert_eq!(papers[0].company_affiliations(), "Universidad de Granada, Spain");
  Ok(())
}

#[tokio::test]
async fn test_search_then_fetch() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let search = mock_search(
    &mut server,
    "pd-1",
    200,
    r#"{"esearchresult":{"idlist":["38000001","38000002"]}}"#,
  )
  .await;
  let fetch = mock_fetch(&mut server, "38000001,38000002", 200, EFETCH_BODY).await;

  let pubmed = PubMed::new(mock_config(&server));
  let ids = pubmed.search("pd-1").await?;
  let papers = pubmed.fetch_details(&ids).await?;

  search.assert_async().await;
  fetch.assert_async().await;
  assert_eq!(papers.len(), 2);
  Ok(())
}
