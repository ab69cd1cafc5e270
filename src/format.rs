//! Pure formatting helpers over the caller-supplied lookup tables.

use crate::models::{IssueRelation, IssueStatusIndex};

/// Returns the display name for a status id, `"Unknown"` when the id is not
/// in the enumeration (statuses deleted after the issue last changed).
pub fn status_name<'a>(statuses: &'a IssueStatusIndex, status_id: &str) -> &'a str {
    statuses
        .get(status_id)
        .map(|status| status.name.as_str())
        .unwrap_or("Unknown")
}

/// Returns whether a status id represents a closed state, `false` when the
/// id is not in the enumeration.
pub fn status_is_closed(statuses: &IssueStatusIndex, status_id: &str) -> bool {
    statuses
        .get(status_id)
        .map(|status| status.is_closed)
        .unwrap_or(false)
}

/// Denormalizes formal issue relations into the mention-style text GitLab
/// uses, one `"<type> #<counterpart>"` per relation joined with `", "`. The
/// counterpart is whichever end of the relation is not `issue_id`. Empty
/// when there are no relations.
pub fn relations_summary(relations: &[IssueRelation], issue_id: u64) -> String {
    relations
        .iter()
        .map(|relation| {
            let other = if relation.issue_id == issue_id {
                relation.issue_to_id
            } else {
                relation.issue_id
            };
            format!("{} #{}", relation.relation_type, other)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
