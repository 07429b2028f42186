use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::errors::{ExtractorError, FetchError};
use crate::models::{ActiveReportsResponse, FixReportResponse, IssuesResponse};
use super::provider::*;
use tracing::{debug, info};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const API_KEY_HEADER: &str = "x-mobb-key";

/// HTTP client for the Mobb REST API. Carries the credential header and the
/// per-request timeout; constructed once per run.
pub struct MobbClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl MobbClient {
    pub fn new(api_token: &str, base_url: &str) -> Result<Self, ExtractorError> {
        Self::with_timeout(api_token, base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_token: &str, base_url: &str, timeout: Duration) -> Result<Self, ExtractorError> {
        let mut key = HeaderValue::from_str(api_token).map_err(|_| {
            ExtractorError::Config("API token contains characters not allowed in an HTTP header".into())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractorError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        info!(endpoint = %endpoint, "Making request");

        let resp = self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.request_error(endpoint, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| self.request_error(endpoint, e))?;
        debug!(endpoint = %endpoint, bytes = body.len(), "Response received");

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    fn request_error(&self, endpoint: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            FetchError::Network {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl MobbApi for MobbClient {
    async fn active_reports(&self) -> Result<ActiveReportsResponse, FetchError> {
        self.get_json(ACTIVE_REPORTS_ENDPOINT, &[]).await
    }

    async fn fix_report(&self, fix_report_id: &str) -> Result<FixReportResponse, FetchError> {
        let endpoint = format!("{}/{}", FIX_REPORT_ENDPOINT, fix_report_id);
        self.get_json(&endpoint, &[]).await
    }

    async fn issues(&self, fix_report_id: &str) -> Result<IssuesResponse, FetchError> {
        self.get_json(ISSUES_ENDPOINT, &[("fixReportId", fix_report_id)]).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
