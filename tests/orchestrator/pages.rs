use httpmock::Method::GET;
use newswire_rs::{FeedParams, QueryOrchestrator, SubmitOutcome};

fn page_mock<'a>(server: &'a httpmock::MockServer, page: &str, tag: &str) -> httpmock::Mock<'a> {
    let body = crate::common::page_body(tag, 1, 9);
    server.mock(move |when, then| {
        when.method(GET).path("/api/news").query_param("page", page);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

#[tokio::test]
async fn load_page_clamps_below_one() {
    let server = crate::common::setup_server();
    let mock_p1 = page_mock(&server, "1", "p1");

    let client = crate::common::client_for(&server);
    let (orch, _rx) = QueryOrchestrator::new(&client, FeedParams::default());

    assert!(matches!(orch.load_page(0).await, SubmitOutcome::Fetched(_)));
    assert_eq!(orch.params().await.page, 1);
    mock_p1.assert_hits(1);
}

#[tokio::test]
async fn next_page_saturates_at_the_top() {
    let server = crate::common::setup_server();
    let mock_max = page_mock(&server, &u32::MAX.to_string(), "max");

    let client = crate::common::client_for(&server);
    let initial = FeedParams {
        page: u32::MAX,
        ..FeedParams::default()
    };
    let (orch, _rx) = QueryOrchestrator::new(&client, initial);

    assert!(matches!(orch.next_page().await, SubmitOutcome::Fetched(_)));
    assert_eq!(orch.params().await.page, u32::MAX);
    mock_max.assert_hits(1);
}

#[tokio::test]
async fn next_and_prev_walk_the_pages() {
    let server = crate::common::setup_server();
    let mock_p1 = page_mock(&server, "1", "p1");
    let mock_p2 = page_mock(&server, "2", "p2");

    let client = crate::common::client_for(&server);
    let (orch, _rx) = QueryOrchestrator::new(&client, FeedParams::default());

    // Starting on page 1, prev is a no-op.
    assert!(orch.prev_page().await.is_none());
    mock_p1.assert_hits(0);

    let SubmitOutcome::Fetched(page) = orch.next_page().await else {
        panic!("expected page 2 fetch");
    };
    assert_eq!(page.articles[0].title, "Headline p2 0");
    assert_eq!(orch.params().await.page, 2);

    let out = orch.prev_page().await.expect("page 2 has a predecessor");
    assert!(matches!(out, SubmitOutcome::Fetched(_)));
    assert_eq!(orch.params().await.page, 1);

    mock_p1.assert_hits(1);
    mock_p2.assert_hits(1);
}
