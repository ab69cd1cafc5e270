mod issue;
mod milestone;
mod status;
mod user;
mod version;

pub use issue::{IssueRelation, JournalDetail, JournalEntry, NamedRef, RedmineIssue};
pub use milestone::{gitlab_milestone_index, GitlabMilestone, GitlabMilestoneIndex};
pub use status::{issue_status_index, IssueStatus, IssueStatusIndex};
pub use user::{
    gitlab_user_index, redmine_user_index, GitlabUser, GitlabUserIndex, RedmineUser,
    RedmineUserIndex,
};
pub use version::RedmineVersion;
