use crate::client::MobbApi;
use crate::models::ReportDetails;
use tracing::{error, info, warn};

/// Fetch project and repository names for a fix report.
///
/// `None` on request failure or an empty payload; the report cannot be
/// exported without its names and should be skipped.
pub async fn fetch_report_details(api: &dyn MobbApi, fix_report_id: &str) -> Option<ReportDetails> {
    info!(report_id = %fix_report_id, "Fetching details for fix report");

    let response = match api.fix_report(fix_report_id).await {
        Ok(response) => response,
        Err(e) => {
            error!(report_id = %fix_report_id, error = %e, kind = e.kind(), "Failed to fetch details for fix report");
            return None;
        }
    };

    match response.first() {
        Some(detail) => Some(ReportDetails::from_detail(fix_report_id, detail)),
        None => {
            warn!(report_id = %fix_report_id, "No fix report data found");
            None
        }
    }
}
