use super::*;

#[tokio::test]
async fn test_search_returns_ids_in_order() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let mock = mock_search(
    &mut server,
    "cancer immunotherapy",
    200,
    r#"{"header":{"type":"esearch","version":"0.3"},
        "esearchresult":{"count":"2","retmax":"3","retstart":"0",
                         "idlist":["38000002","38000001","38000002"]}}"#,
  )
  .await;

  let pubmed = PubMed::new(mock_config(&server));
  let ids = pubmed.search("cancer immunotherapy").await?;

  assert_eq!(ids, vec!["38000002", "38000001", "38000002"]);
  mock.assert_async().await;
  Ok(())
}

#[tokio::test]
async fn test_empty_query_is_forwarded() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let mock = mock_search(&mut server, "", 200, r#"{"esearchresult":{"idlist":[]}}"#).await;

  let ids = PubMed::new(mock_config(&server)).search("").await?;

  assert!(ids.is_empty());
  mock.assert_async().await;
  Ok(())
}

#[tokio::test]
async fn test_search_missing_idlist_is_format_error() {
  let mut server = mockito::Server::new_async().await;
  let _mock = mock_search(
    &mut server,
    "crispr",
    200,
    r#"{"esearchresult":{"ERROR":"Invalid query"}}"#,
  )
  .await;

  let result = PubMed::new(mock_config(&server)).search("crispr").await;
  assert!(matches!(result, Err(PubfetchError::Format(_))));
}

#[tokio::test]
async fn test_search_non_success_status_is_network_error() {
  let mut server = mockito::Server::new_async().await;
  let _mock = mock_search(&mut server, "crispr", 500, "Internal Server Error").await;

  let result = PubMed::new(mock_config(&server)).search("crispr").await;
  assert!(matches!(result, Err(PubfetchError::Network(_))));
}

#[tokio::test]
async fn test_search_connection_failure_is_network_error() {
  let config = Config {
    search_url: "http://127.0.0.1:1/esearch.fcgi".to_string(),
    ..Config::default()
  };

  let result = PubMed::new(config).search("crispr").await;
  assert!(matches!(result, Err(PubfetchError::Network(_))));
}

#[tokio::test]
async fn test_search_respects_configured_max_results() -> TestResult<()> {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("GET", "/esearch.fcgi")
    .match_query(Matcher::UrlEncoded("retmax".into(), "3".into()))
    .with_body(r#"{"esearchresult":{"idlist":["1","2","3"]}}"#)
    .expect(1)
    .create_async()
    .await;

  let config = Config { max_results: 3, ..mock_config(&server) };
  let ids = PubMed::new(config).search("crispr").await?;

  assert_eq!(ids.len(), 3);
  mock.assert_async().await;
  Ok(())
}

#[ignore = "Queries the live NCBI E-utilities service."]
#[tokio::test]
async fn test_live_search() -> TestResult<()> {
  let ids = PubMed::default().search("cancer immunotherapy").await?;

  assert!(ids.len() <= 10);
  assert!(ids.iter().all(|id| !id.is_empty()));
  Ok(())
}
