use serde::{Deserialize, Serialize};
use super::lenient;

/// Body of `GET /api/rest/active-reports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveReportsResponse {
    #[serde(rename = "fixReport", default)]
    pub fix_report: Option<Vec<ReportSummary>>,
}

impl ActiveReportsResponse {
    pub fn reports(&self) -> &[ReportSummary] {
        self.fix_report.as_deref().unwrap_or_default()
    }
}

/// One entry of the active report listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "lenient::scalar_text")]
    pub id: Option<String>,
    /// Creation timestamp as sent by the API; parsed by the lister.
    /// Non-string values read as absent.
    #[serde(rename = "createdOn", default, deserialize_with = "lenient::string_only")]
    pub created_on: Option<String>,
}

/// Body of `GET /api/rest/fix-reports/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixReportResponse {
    #[serde(rename = "fixReport", default)]
    pub fix_report: Option<Vec<FixReportDetail>>,
}

impl FixReportResponse {
    /// The API wraps a single report in a list.
    pub fn first(&self) -> Option<&FixReportDetail> {
        self.fix_report.as_ref().and_then(|reports| reports.first())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixReportDetail {
    #[serde(rename = "vulnerabilityReport", default)]
    pub vulnerability_report: Option<VulnerabilityReportRef>,
    #[serde(default)]
    pub repo: Option<NamedRef>,
}

impl FixReportDetail {
    pub fn project_name(&self) -> Option<&str> {
        self.vulnerability_report
            .as_ref()?
            .project
            .as_ref()?
            .name
            .as_deref()
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repo.as_ref()?.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VulnerabilityReportRef {
    #[serde(default)]
    pub project: Option<NamedRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "lenient::any_text")]
    pub name: Option<String>,
}

/// Names extracted from a fix report, carried onto every exported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDetails {
    pub fix_report_id: String,
    pub project_name: Option<String>,
    pub repo_name: Option<String>,
}

impl ReportDetails {
    pub fn from_detail(fix_report_id: &str, detail: &FixReportDetail) -> Self {
        Self {
            fix_report_id: fix_report_id.to_string(),
            project_name: detail.project_name().map(str::to_string),
            repo_name: detail.repo_name().map(str::to_string),
        }
    }
}
