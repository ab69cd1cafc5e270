use std::collections::HashMap;

use serde::Deserialize;

/// Represents one entry of the Redmine issue-status enumeration.
#[derive(Debug, Deserialize, Clone)]
pub struct IssueStatus {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_closed: bool,
}

/// Status lookup keyed by the decimal string of the status id, since journal
/// details carry status ids as strings.
pub type IssueStatusIndex = HashMap<String, IssueStatus>;

pub fn issue_status_index<I>(statuses: I) -> IssueStatusIndex
where
    I: IntoIterator<Item = IssueStatus>,
{
    statuses
        .into_iter()
        .map(|status| (status.id.to_string(), status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{issue_status_index, IssueStatus};

    #[test]
    fn index_is_keyed_by_stringified_id() {
        let index = issue_status_index([IssueStatus {
            id: 5,
            name: "Closed".to_string(),
            is_closed: true,
        }]);

        assert!(index["5"].is_closed);
        assert!(!index.contains_key("6"));
    }
}
