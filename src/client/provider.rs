use async_trait::async_trait;
use crate::errors::FetchError;
use crate::models::{ActiveReportsResponse, FixReportResponse, IssuesResponse};

pub const ACTIVE_REPORTS_ENDPOINT: &str = "/api/rest/active-reports";
pub const FIX_REPORT_ENDPOINT: &str = "/api/rest/fix-reports";
pub const ISSUES_ENDPOINT: &str = "/api/rest/v5/issues";

#[async_trait]
pub trait MobbApi: Send + Sync {
    /// List currently active fix reports
    async fn active_reports(&self) -> Result<ActiveReportsResponse, FetchError>;

    /// Fetch one fix report with its project and repository
    async fn fix_report(&self, fix_report_id: &str) -> Result<FixReportResponse, FetchError>;

    /// Fetch the issues attached to a fix report
    async fn issues(&self, fix_report_id: &str) -> Result<IssuesResponse, FetchError>;

    /// Base URL for logging
    fn base_url(&self) -> &str;
}
