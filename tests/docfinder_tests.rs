//! End-to-end lookup tests with mocked network responses
//!
//! These tests use wiremock to stand in for both the search engine and the
//! documentation host, and validate:
//! - Candidate priority and short-circuiting
//! - Negative results when nothing matches
//! - Answer derivation (line matching, sentinels)
//! - Search failure policies (fatal vs skip)

use docscout::config::SearchErrorPolicy;
use docscout::{DocFinder, DuckDuckGoBackend, GoogleBackend, FETCH_FAILED, NO_DIRECT_ANSWER};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

/// Build a finder whose DuckDuckGo backend targets the mock server.
fn finder_for(server: &MockServer, policy: SearchErrorPolicy) -> DocFinder {
    let backend = DuckDuckGoBackend::new("docscout-tests", Some(server.uri()));
    DocFinder::new(Arc::new(backend), "docscout-tests", policy)
}

/// A minimal search-result page embedding the given links.
fn result_page(links: &[&str]) -> String {
    let anchors: Vec<String> = links
        .iter()
        .map(|l| format!(r#"<a class="result__a" href="{}">{}</a>"#, l, l))
        .collect();
    format!("<html><body>{}</body></html>", anchors.join("\n"))
}

/// Mount a search mock for one query on the DuckDuckGo HTML endpoint.
async fn mount_search(server: &MockServer, query: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount a document fetch mock at the given path.
async fn mount_document(server: &MockServer, doc_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(doc_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ============= Priority & Negative Results =============

#[tokio::test]
async fn first_candidate_with_a_match_shadows_later_ones() {
    let server = MockServer::start().await;
    let full_url = format!("{}/llms-full.txt", server.uri());
    let short_url = format!("{}/llms.txt", server.uri());

    // The llms-full.txt result page also advertises an llms.txt link; the
    // higher-priority type must still win.
    mount_search(
        &server,
        "react llms-full.txt",
        result_page(&[&full_url, &short_url]),
    )
    .await;
    mount_document(&server, "/llms-full.txt", "React documentation dump").await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.file_type.unwrap().as_str(), "llms-full.txt");
    assert_eq!(result.url.unwrap(), full_url);
    assert_eq!(result.answer.unwrap(), "React documentation dump");
}

#[tokio::test]
async fn falls_through_to_lower_priority_candidates() {
    let server = MockServer::start().await;
    let yaml_url = format!("{}/openapi.yaml", server.uri());

    // No matches for the two llms types, a hit for openapi.yaml.
    mount_search(&server, "petstore llms-full.txt", result_page(&[])).await;
    mount_search(&server, "petstore llms.txt", result_page(&[])).await;
    mount_search(&server, "petstore openapi.yaml", result_page(&[&yaml_url])).await;
    mount_document(&server, "/openapi.yaml", "openapi: 3.0.0").await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("petstore", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.file_type.unwrap().as_str(), "openapi.yaml");
}

#[tokio::test]
async fn no_match_anywhere_is_a_normal_negative_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>no results</html>"))
        .expect(3)
        .mount(&server)
        .await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("no-such-library", None).await.unwrap();

    assert!(!result.found);
    assert!(result.url.is_none());
    assert!(result.file_type.is_none());
    assert!(result.answer.is_none());
    assert_eq!(
        result.message,
        "Could not find llms.txt, llms-full.txt, or openapi.yaml for no-such-library"
    );
}

#[tokio::test]
async fn only_the_first_url_of_the_winning_page_is_fetched() {
    let server = MockServer::start().await;
    let first = format!("{}/first/llms.txt", server.uri());
    let second = format!("{}/second/llms.txt", server.uri());

    mount_search(&server, "leftpad llms-full.txt", result_page(&[])).await;
    mount_search(&server, "leftpad llms.txt", result_page(&[&first, &second])).await;
    mount_document(&server, "/first/llms.txt", "the first document").await;
    // No mock for /second/llms.txt: fetching it would 404 and surface as a
    // sentinel answer, which the assertion below would catch.

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("leftpad", None).await.unwrap();

    assert_eq!(result.url.unwrap(), first);
    assert_eq!(result.answer.unwrap(), "the first document");
}

// ============= Answer Derivation =============

#[tokio::test]
async fn question_returns_first_matching_line_verbatim() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());

    mount_search(&server, "react llms-full.txt", result_page(&[&url])).await;
    mount_document(
        &server,
        "/llms-full.txt",
        "# React\nReact Hooks let you use state...\nAnother line about HOOKS here\n",
    )
    .await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", Some("hooks")).await.unwrap();

    assert!(result.found);
    assert_eq!(result.url.unwrap(), url);
    assert_eq!(result.file_type.unwrap().as_str(), "llms-full.txt");
    // Case-insensitive match, original casing preserved, first line wins.
    assert_eq!(result.answer.unwrap(), "React Hooks let you use state...");
    assert!(result.message.starts_with("Found llms-full.txt for react: "));
}

#[tokio::test]
async fn question_with_no_matching_line_yields_sentinel() {
    let server = MockServer::start().await;
    let url = format!("{}/llms.txt", server.uri());

    mount_search(&server, "vue llms-full.txt", result_page(&[])).await;
    mount_search(&server, "vue llms.txt", result_page(&[&url])).await;
    mount_document(&server, "/llms.txt", "# Vue\nReactivity basics\n").await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("vue", Some("kubernetes")).await.unwrap();

    assert!(result.found);
    assert_eq!(result.answer.unwrap(), NO_DIRECT_ANSWER);
}

#[tokio::test]
async fn no_question_returns_full_document() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());
    let body = "line one\nline two\nline three";

    mount_search(&server, "svelte llms-full.txt", result_page(&[&url])).await;
    mount_document(&server, "/llms-full.txt", body).await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("svelte", None).await.unwrap();

    assert_eq!(result.answer.unwrap(), body);
}

#[tokio::test]
async fn empty_document_yields_sentinel() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());

    mount_search(&server, "ghost llms-full.txt", result_page(&[&url])).await;
    mount_document(&server, "/llms-full.txt", "").await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("ghost", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.answer.unwrap(), NO_DIRECT_ANSWER);
}

#[tokio::test]
async fn failed_document_fetch_degrades_to_sentinel_but_stays_found() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());

    mount_search(&server, "react llms-full.txt", result_page(&[&url])).await;
    Mock::given(method("GET"))
        .and(path("/llms-full.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", Some("hooks")).await.unwrap();

    assert!(result.found, "fetch failure must not flip found");
    assert_eq!(result.url.unwrap(), url);
    assert_eq!(result.answer.unwrap(), FETCH_FAILED);
}

// ============= Search Failure Policies =============

#[tokio::test]
async fn search_failure_is_fatal_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let finder = finder_for(&server, SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", None).await;

    assert!(matches!(result, Err(docscout::AppError::Search(_))));
}

#[tokio::test]
async fn skip_policy_moves_on_to_the_next_candidate() {
    let server = MockServer::start().await;
    let url = format!("{}/llms.txt", server.uri());

    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "react llms-full.txt"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_search(&server, "react llms.txt", result_page(&[&url])).await;
    mount_document(&server, "/llms.txt", "React index").await;

    let finder = finder_for(&server, SearchErrorPolicy::Skip);
    let result = finder.lookup("react", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.file_type.unwrap().as_str(), "llms.txt");
}

#[tokio::test]
async fn invalid_user_agent_still_yields_a_working_client() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());

    mount_search(&server, "react llms-full.txt", result_page(&[&url])).await;
    mount_document(&server, "/llms-full.txt", "React documentation dump").await;

    // Newlines are not a legal header value; the client must fall back to
    // defaults rather than dying or silently dropping requests.
    let backend = DuckDuckGoBackend::new("bad\nagent", Some(server.uri()));
    let finder = DocFinder::new(Arc::new(backend), "bad\nagent", SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.answer.unwrap(), "React documentation dump");
}

// ============= Backends =============

#[tokio::test]
async fn google_backend_uses_the_search_path() {
    let server = MockServer::start().await;
    let url = format!("{}/llms-full.txt", server.uri());

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "react llms-full.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(result_page(&[&url])))
        .mount(&server)
        .await;
    mount_document(&server, "/llms-full.txt", "React documentation dump").await;

    let backend = GoogleBackend::new("docscout-tests", Some(server.uri()));
    let finder = DocFinder::new(Arc::new(backend), "docscout-tests", SearchErrorPolicy::Fatal);
    let result = finder.lookup("react", None).await.unwrap();

    assert!(result.found);
    assert_eq!(result.url.unwrap(), url);
}
