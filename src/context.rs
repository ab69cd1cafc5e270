//! Per-batch conversion context.

use crate::markup::MarkupConverter;
use crate::models::{GitlabMilestoneIndex, GitlabUserIndex, IssueStatusIndex, RedmineUserIndex};

/// Everything a conversion call reads besides the record itself: the four
/// caller-built lookup indexes, the Redmine base URL used verbatim for
/// back-reference links, and the markup converter. All fields are borrows;
/// the core never mutates the indexes, so one context can serve any number
/// of conversions, concurrently included.
#[derive(Clone, Copy)]
pub struct MigrationContext<'a> {
    pub redmine_users: &'a RedmineUserIndex,
    pub gitlab_users: &'a GitlabUserIndex,
    pub gitlab_milestones: &'a GitlabMilestoneIndex,
    pub issue_statuses: &'a IssueStatusIndex,
    pub markup: &'a dyn MarkupConverter,
    pub redmine_url: &'a str,
}
