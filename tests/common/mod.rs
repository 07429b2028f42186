#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-token-0123456789abcdef";

/// Requests seen by the fake API, as "list", "detail:<id>", "issues:<id>".
pub type Calls = Arc<Mutex<Vec<String>>>;

pub fn days_ago(days: i64) -> String {
    (Utc::now() - chrono::Duration::days(days)).to_rfc3339()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("x-mobb-key").and_then(|v| v.to_str().ok()) == Some(TOKEN)
}

fn detail(project: &str, repo: &str) -> Value {
    json!({"fixReport": [{
        "id": "ignored",
        "vulnerabilityReport": {"project": {"name": project}},
        "repo": {"name": repo}
    }]})
}

fn tag(value: &str) -> Value {
    json!({"vulnerability_report_issue_tag_value": value})
}

async fn active_reports(State(calls): State<Calls>, headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    calls.lock().unwrap().push("list".into());
    Ok(Json(json!({"fixReport": [
        {"id": "r1", "createdOn": days_ago(1)},
        {"id": "r2", "createdOn": days_ago(40)},
        {"id": "r3", "createdOn": days_ago(2)},
        {"id": "r4", "createdOn": "not-a-date"},
        {"id": "r5", "createdOn": days_ago(3)}
    ]})))
}

async fn fix_report(
    State(calls): State<Calls>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    calls.lock().unwrap().push(format!("detail:{}", id));
    match id.as_str() {
        "r1" => Ok(Json(detail("payments", "payments-api"))),
        "r3" => Ok(Json(json!({"fixReport": []}))),
        "r5" => Ok(Json(detail("core", "core-svc"))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn issues(
    State(calls): State<Calls>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let Some(id) = params.get("fixReportId") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    calls.lock().unwrap().push(format!("issues:{}", id));
    let list = match id.as_str() {
        "r1" => json!([
            {"vendorInstanceId": null, "vulnerabilityReportIssueTags": [tag("fp-confirmed")]},
            {"vendorInstanceId": "untagged", "vulnerabilityReportIssueTags": []}
        ]),
        "r5" => json!([
            {"vendorInstanceId": "v-51", "fpDescription": "Only reachable from tests",
             "vulnerabilityReportIssueTags": [tag("TEST_CODE"), tag(""), tag("FALSE_POSITIVE")]},
            {"vendorInstanceId": "v-52", "vulnerabilityReportIssueTags": [{"vulnerability_report_issue_tag_value": null}]},
            {"vendorInstanceId": "v-53", "fpDescription": "Vendored, not ours",
             "vulnerabilityReportIssueTags": [tag("VENDOR_CODE")]}
        ]),
        _ => json!([]),
    };
    Ok(Json(json!({"getIssuesApiV5": {"vulnerability_report_issue": list}})))
}

pub fn fake_api(calls: Calls) -> Router {
    Router::new()
        .route("/api/rest/active-reports", get(active_reports))
        .route("/api/rest/fix-reports/:id", get(fix_report))
        .route("/api/rest/v5/issues", get(issues))
        .with_state(calls)
}

/// Listing endpoint that answers too slowly for a short client timeout.
pub fn slow_api(delay: Duration) -> Router {
    Router::new().route(
        "/api/rest/active-reports",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({"fixReport": []}))
        }),
    )
}

/// Listing endpoint that answers 200 with a non-JSON body.
pub fn html_api() -> Router {
    Router::new().route(
        "/api/rest/active-reports",
        get(|| async { "<html>maintenance</html>" }),
    )
}

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}
