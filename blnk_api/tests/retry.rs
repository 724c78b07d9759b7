mod common;

use std::time::Duration;

use blnk_api::{Backoff, ClientOptions, Error, ListQuery, Method, NoopLogger};
use common::{stub_client, RecordingLogger, ScriptedTransport, Step};

const LEDGER: &str = r#"{"ledger_id": "ldg_1", "name": "World Ledger", "created_at": "2024-02-20T05:28:03Z"}"#;

fn options(retry_count: usize) -> ClientOptions {
    ClientOptions::default()
        .with_retry_count(retry_count)
        .with_logger(NoopLogger)
}

#[tokio::test(start_paused = true)]
async fn transport_failures_are_retried_until_success() {
    let transport = ScriptedTransport::new(vec![
        Step::Fail,
        Step::Fail,
        Step::Respond(200, LEDGER.to_string()),
    ]);
    let client = stub_client(transport.clone(), options(3));

    let started = tokio::time::Instant::now();
    let ledger = client.ledgers().get("ldg_1").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(ledger.ledger_id, "ldg_1");
    assert_eq!(transport.calls(), 3);
    // Two sleeps of the default 2s fixed backoff.
    assert!(elapsed >= Duration::from_secs(4), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(6), "elapsed {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn server_errors_exhaust_every_attempt() {
    let transport = ScriptedTransport::new(vec![Step::Respond(500, "boom".to_string())]);
    let client = stub_client(transport.clone(), options(4));

    let err = client.ledgers().get("ldg_1").await.unwrap_err();

    assert_eq!(transport.calls(), 4);
    match err {
        Error::MaxRetriesExceeded {
            attempts,
            last_error,
        } => {
            assert_eq!(attempts, 4);
            assert!(last_error.contains("500"));
        }
        other => panic!("expected MaxRetriesExceeded, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn client_errors_are_not_retried() {
    let transport = ScriptedTransport::new(vec![Step::Respond(404, "ledger not found".to_string())]);
    let client = stub_client(transport.clone(), options(3));

    let started = tokio::time::Instant::now();
    let err = client.ledgers().get("ldg_missing").await.unwrap_err();

    assert_eq!(transport.calls(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "ledger not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn malformed_success_body_is_not_retried() {
    let transport = ScriptedTransport::new(vec![Step::Respond(200, "{not valid json}".to_string())]);
    let client = stub_client(transport.clone(), options(3));

    let err = client.ledgers().get("ldg_1").await.unwrap_err();

    assert_eq!(transport.calls(), 1);
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test(start_paused = true)]
async fn server_error_then_success_recovers() {
    let transport = ScriptedTransport::new(vec![
        Step::Respond(503, "unavailable".to_string()),
        Step::Respond(200, LEDGER.to_string()),
    ]);
    let client = stub_client(transport.clone(), options(3));

    let ledger = client.ledgers().get("ldg_1").await.unwrap();

    assert_eq!(ledger.name, "World Ledger");
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn single_attempt_never_sleeps() {
    let transport = ScriptedTransport::new(vec![Step::Fail]);
    let client = stub_client(transport.clone(), options(1));

    let started = tokio::time::Instant::now();
    let err = client.ledgers().get("ldg_1").await.unwrap_err();

    assert_eq!(transport.calls(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(matches!(err, Error::MaxRetriesExceeded { attempts: 1, .. }));
}

#[tokio::test(start_paused = true)]
async fn every_failed_attempt_is_logged() {
    let logger = RecordingLogger::default();
    let transport = ScriptedTransport::new(vec![
        Step::Fail,
        Step::Respond(502, "bad gateway".to_string()),
        Step::Respond(200, LEDGER.to_string()),
    ]);
    let client = stub_client(
        transport,
        ClientOptions::default()
            .with_retry_count(3)
            .with_logger(logger.clone()),
    );

    client.ledgers().get("ldg_1").await.unwrap();

    let lines = logger.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("INFO"));
    assert!(lines[0].contains("connection refused"));
    assert!(lines[1].starts_with("ERROR"));
    assert!(lines[1].contains("502"));
}

#[tokio::test(start_paused = true)]
async fn exponential_backoff_still_stops_at_retry_count() {
    let transport = ScriptedTransport::new(vec![Step::Fail]);
    let client = stub_client(
        transport.clone(),
        options(3).with_backoff(Backoff::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_secs(1),
        }),
    );

    let err = client.ledgers().get("ldg_1").await.unwrap_err();

    assert_eq!(transport.calls(), 3);
    assert!(matches!(err, Error::MaxRetriesExceeded { attempts: 3, .. }));
}

#[tokio::test]
async fn each_attempt_sends_the_same_request() {
    let transport = ScriptedTransport::new(vec![
        Step::Fail,
        Step::Respond(200, "[]".to_string()),
    ]);
    let client = stub_client(
        transport.clone(),
        options(2).with_backoff(Backoff::Fixed(Duration::ZERO)),
    );

    let request = client
        .new_request("ledgers", Method::GET, Some(&ListQuery::default().with_per_page(5)))
        .unwrap();
    let resp = client
        .execute::<Vec<serde_json::Value>>(&request)
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    assert!(resp.data.is_empty());
    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].url, sent[1].url);
    assert_eq!(sent[1].url.query(), Some("per_page=5"));
}
