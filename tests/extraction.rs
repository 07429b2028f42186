mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use mobb_fp::client::{MobbApi, MobbClient};
use mobb_fp::errors::FetchError;
use mobb_fp::models::EXPORT_HEADER;
use mobb_fp::pipeline::PipelineOrchestrator;
use mobb_fp::reporting::CsvExporter;
use tempfile::TempDir;
use common::{fake_api, html_api, read_csv, slow_api, spawn, Calls, TOKEN};

#[tokio::test]
async fn test_full_run_against_fake_api() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn(fake_api(calls.clone())).await;
    let dir = TempDir::new().unwrap();

    let client = MobbClient::new(TOKEN, &base_url).unwrap();
    let exporter = CsvExporter::create(&dir.path().join("export.csv")).unwrap();
    let orchestrator = PipelineOrchestrator::new(Arc::new(client), exporter, 7);

    let summary = orchestrator.run().await.unwrap();
    assert_eq!(summary.reports_total, 5);
    assert_eq!(summary.reports_in_window, 3);
    assert_eq!(summary.reports_too_old, 1);
    assert_eq!(summary.reports_unparseable, 1);
    assert_eq!(summary.reports_skipped, 1);
    assert_eq!(summary.reports_processed, 2);
    assert_eq!(summary.issues_seen, 5);
    assert_eq!(summary.rows_exported, 3);
    assert_eq!(summary.rows_failed, 0);
    assert!(!summary.listing_failed);

    let (header, rows) = read_csv(orchestrator.exporter().path());
    assert_eq!(header, EXPORT_HEADER);
    assert_eq!(
        rows,
        vec![
            vec!["payments", "payments-api", "null", "fp-confirmed", ""],
            vec!["core", "core-svc", "v-51", "TEST_CODE | FALSE_POSITIVE", "Only reachable from tests"],
            vec!["core", "core-svc", "v-53", "VENDOR_CODE", "Vendored, not ours"],
        ]
    );

    let calls = calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec!["list", "detail:r1", "issues:r1", "detail:r3", "detail:r5", "issues:r5"]
    );
}

#[tokio::test]
async fn test_wrong_token_degrades_to_empty_export() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn(fake_api(calls.clone())).await;
    let dir = TempDir::new().unwrap();

    let client = MobbClient::new("not-the-token", &base_url).unwrap();
    let err = client.active_reports().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 401, .. }));

    let exporter = CsvExporter::create(&dir.path().join("export.csv")).unwrap();
    let orchestrator = PipelineOrchestrator::new(Arc::new(client), exporter, 7);
    let summary = orchestrator.run().await.unwrap();
    assert!(summary.listing_failed);
    assert_eq!(summary.rows_exported, 0);

    let (header, rows) = read_csv(orchestrator.exporter().path());
    assert_eq!(header, EXPORT_HEADER);
    assert!(rows.is_empty());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let base_url = spawn(slow_api(Duration::from_secs(3))).await;
    let client = MobbClient::with_timeout(TOKEN, &base_url, Duration::from_millis(200)).unwrap();
    let err = client.active_reports().await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }), "unexpected error: {err}");
    assert_eq!(err.kind(), "timeout");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let base_url = spawn(html_api()).await;
    let client = MobbClient::new(TOKEN, &base_url).unwrap();
    let err = client.active_reports().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn test_missing_route_is_status_error() {
    let base_url = spawn(html_api()).await;
    let client = MobbClient::new(TOKEN, &base_url).unwrap();
    let err = client.fix_report("r1").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_issue_fetch_sends_report_id_query() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let base_url = spawn(fake_api(calls.clone())).await;
    let client = MobbClient::new(TOKEN, &base_url).unwrap();

    let issues = client.issues("r5").await.unwrap().into_issues();
    assert_eq!(issues.len(), 3);
    assert_eq!(calls.lock().unwrap().as_slice(), ["issues:r5"]);
}
