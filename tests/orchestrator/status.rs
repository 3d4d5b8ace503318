use std::time::Duration;

use httpmock::Method::GET;
use newswire_rs::{FeedEvent, FeedParams, NewsClient, QueryOrchestrator, SubmitOutcome};
use url::Url;

fn last_status(rx: &mut tokio::sync::mpsc::UnboundedReceiver<FeedEvent>) -> Option<String> {
    let mut last = None;
    while let Ok(ev) = rx.try_recv() {
        if let FeedEvent::Status(s) = ev {
            last = Some(s);
        }
    }
    last
}

#[tokio::test]
async fn http_error_status_uses_the_body_message() {
    let server = crate::common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/news");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"message":"rate limited"}"#);
    });

    let client = crate::common::client_for(&server);
    let (orch, mut rx) = QueryOrchestrator::new(&client, FeedParams::default());

    let out = orch.submit(FeedParams::default()).await;
    assert_eq!(out, SubmitOutcome::Failed("Error: rate limited".into()));
    assert_eq!(last_status(&mut rx).as_deref(), Some("Error: rate limited"));
}

#[tokio::test]
async fn http_error_status_falls_back_to_status_text() {
    let server = crate::common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/news");
        then.status(500);
    });

    let client = crate::common::client_for(&server);
    let (orch, mut rx) = QueryOrchestrator::new(&client, FeedParams::default());

    let out = orch.submit(FeedParams::default()).await;
    assert_eq!(
        out,
        SubmitOutcome::Failed("Error: Internal Server Error".into())
    );
    assert_eq!(
        last_status(&mut rx).as_deref(),
        Some("Error: Internal Server Error")
    );
}

#[tokio::test]
async fn network_failure_becomes_a_fetch_error_status() {
    let client = NewsClient::builder()
        .base_feed(Url::parse("http://127.0.0.1:1/api/news").unwrap())
        .connect_timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let (orch, mut rx) = QueryOrchestrator::new(&client, FeedParams::default());

    let SubmitOutcome::Failed(status) = orch.submit(FeedParams::default()).await else {
        panic!("expected a failure");
    };
    assert!(status.starts_with("Fetch error:"), "got {status:?}");
    assert_eq!(last_status(&mut rx), Some(status));
}

#[tokio::test]
async fn the_orchestrator_stays_usable_after_a_failure() {
    let server = crate::common::setup_server();
    let mut broken = server.mock(|when, then| {
        when.method(GET).path("/api/news");
        then.status(503)
            .header("content-type", "application/json")
            .body(r#"{"message":"upstream down"}"#);
    });

    let client = crate::common::client_for(&server);
    let (orch, _rx) = QueryOrchestrator::new(&client, FeedParams::default());

    assert_eq!(
        orch.submit(FeedParams::default()).await,
        SubmitOutcome::Failed("Error: upstream down".into())
    );

    // The failure was not cached; once the endpoint recovers the same params
    // fetch cleanly.
    broken.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/news");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::page_body("recovered", 2, 2));
    });

    let SubmitOutcome::Fetched(page) = orch.submit(FeedParams::default()).await else {
        panic!("expected a clean fetch after recovery");
    };
    assert_eq!(page.articles[0].title, "Headline recovered 0");
}

#[tokio::test]
async fn successful_submits_report_the_article_count() {
    let server = crate::common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/api/news");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::page_body("ok", 3, 57));
    });

    let client = crate::common::client_for(&server);
    let (orch, mut rx) = QueryOrchestrator::new(&client, FeedParams::default());

    orch.submit(FeedParams::default()).await;
    assert_eq!(
        last_status(&mut rx).as_deref(),
        Some("Showing 3 articles (totalResults: 57)")
    );

    // A cache hit reports its age instead.
    orch.submit(FeedParams::default()).await;
    assert_eq!(
        last_status(&mut rx).as_deref(),
        Some("Showing cached results (updated 0s ago)")
    );
}
