use serde::Serialize;
use super::issue::TaggedIssue;
use super::report::ReportDetails;

/// Column order of the exported CSV.
pub const EXPORT_HEADER: [&str; 5] = [
    "project_name",
    "repo_name",
    "vendorInstanceId",
    "state",
    "FPDescription",
];

/// Written in place of a missing vendor id so the cell is never empty.
pub const NULL_MARKER: &str = "null";

/// One line of the output file. Field order must match `EXPORT_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub project_name: String,
    pub repo_name: String,
    #[serde(rename = "vendorInstanceId")]
    pub vendor_instance_id: String,
    pub state: String,
    #[serde(rename = "FPDescription")]
    pub fp_description: String,
}

impl ExportRow {
    pub fn new(details: &ReportDetails, tagged: &TaggedIssue) -> Self {
        Self {
            project_name: details.project_name.clone().unwrap_or_default(),
            repo_name: details.repo_name.clone().unwrap_or_default(),
            vendor_instance_id: tagged
                .issue
                .vendor_instance_id()
                .unwrap_or_else(|| NULL_MARKER.to_string()),
            state: tagged.state.clone(),
            fp_description: tagged.issue.fp_description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::Issue;

    fn details() -> ReportDetails {
        ReportDetails {
            fix_report_id: "r1".into(),
            project_name: Some("payments".into()),
            repo_name: Some("payments-api".into()),
        }
    }

    #[test]
    fn test_missing_vendor_id_uses_null_marker() {
        let tagged = TaggedIssue { issue: Issue::default(), state: "fp-confirmed".into() };
        let row = ExportRow::new(&details(), &tagged);
        assert_eq!(row.vendor_instance_id, "null");
        assert_eq!(row.fp_description, "");
        assert_eq!(row.state, "fp-confirmed");
    }

    #[test]
    fn test_names_inherited_from_report() {
        let issue = Issue {
            vendor_instance_id: Some(serde_json::json!("abc")),
            fp_description: Some("generated code".into()),
            tags: None,
        };
        let row = ExportRow::new(&details(), &TaggedIssue { issue, state: "x".into() });
        assert_eq!(row.project_name, "payments");
        assert_eq!(row.repo_name, "payments-api");
        assert_eq!(row.vendor_instance_id, "abc");
        assert_eq!(row.fp_description, "generated code");
    }

    #[test]
    fn test_absent_report_names_are_empty_cells() {
        let details = ReportDetails { fix_report_id: "r9".into(), project_name: None, repo_name: None };
        let row = ExportRow::new(&details, &TaggedIssue { issue: Issue::default(), state: "x".into() });
        assert_eq!(row.project_name, "");
        assert_eq!(row.repo_name, "");
    }
}
