use crate::models::{Issue, TaggedIssue};
use tracing::debug;

pub const TAG_SEPARATOR: &str = " | ";

/// Non-empty tag values of an issue joined by `TAG_SEPARATOR`, or `None`
/// when the issue carries no such value.
pub fn joined_tags(issue: &Issue) -> Option<String> {
    let values: Vec<&str> = issue
        .tags()
        .iter()
        .filter_map(|tag| tag.value.as_deref())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(TAG_SEPARATOR))
    }
}

/// Keep the issues that a reviewer tagged, in input order.
pub fn filter_irrelevant(issues: Vec<Issue>) -> Vec<TaggedIssue> {
    let tagged: Vec<TaggedIssue> = issues
        .into_iter()
        .filter_map(|issue| joined_tags(&issue).map(|state| TaggedIssue { issue, state }))
        .collect();
    debug!(count = tagged.len(), "Filtered to irrelevant issues");
    tagged
}
