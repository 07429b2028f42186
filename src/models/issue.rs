use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::lenient;

/// Body of `GET /api/rest/v5/issues?fixReportId=...`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuesResponse {
    #[serde(rename = "getIssuesApiV5", default)]
    pub get_issues: Option<IssuesPage>,
}

impl IssuesResponse {
    pub fn into_issues(self) -> Vec<Issue> {
        self.get_issues
            .and_then(|page| page.vulnerability_report_issue)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuesPage {
    #[serde(default)]
    pub vulnerability_report_issue: Option<Vec<Issue>>,
}

/// A single vulnerability finding within a fix report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Scanner-side identifier; kept as raw JSON since vendors differ on its type.
    #[serde(rename = "vendorInstanceId", default)]
    pub vendor_instance_id: Option<Value>,
    #[serde(rename = "fpDescription", default, deserialize_with = "lenient::any_text")]
    pub fp_description: Option<String>,
    #[serde(rename = "vulnerabilityReportIssueTags", default)]
    pub tags: Option<Vec<IssueTag>>,
}

impl Issue {
    /// Vendor id as text, `None` when absent or JSON null.
    pub fn vendor_instance_id(&self) -> Option<String> {
        match self.vendor_instance_id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn tags(&self) -> &[IssueTag] {
        self.tags.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueTag {
    #[serde(
        rename = "vulnerability_report_issue_tag_value",
        default,
        deserialize_with = "lenient::scalar_text"
    )]
    pub value: Option<String>,
}

/// An issue that passed the relevance filter, with its tag text joined.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedIssue {
    pub issue: Issue,
    pub state: String,
}
