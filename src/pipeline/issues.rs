use crate::client::MobbApi;
use crate::models::Issue;
use tracing::{error, info};

/// Fetch the issues of a fix report. Empty on failure or when the response
/// lacks the issue collection.
pub async fn fetch_issues(api: &dyn MobbApi, fix_report_id: &str) -> Vec<Issue> {
    info!(report_id = %fix_report_id, "Fetching issues for fix report");

    match api.issues(fix_report_id).await {
        Ok(response) => {
            let issues = response.into_issues();
            info!(report_id = %fix_report_id, count = issues.len(), "Found issues for fix report");
            issues
        }
        Err(e) => {
            error!(report_id = %fix_report_id, error = %e, kind = e.kind(), "Failed to fetch issues for fix report");
            Vec::new()
        }
    }
}
