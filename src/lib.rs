//! Converts Redmine records into GitLab creation-API payloads.
//!
//! The crate is a pure transformation layer: callers fetch Redmine issues
//! and versions, build the lookup indexes, and submit the returned
//! `(payload, metadata)` pairs themselves. Nothing here performs I/O or
//! holds state across calls.

pub mod context;
pub mod convert;
pub mod error;
pub mod format;
pub mod identity;
pub mod journal;
pub mod markup;
pub mod models;

pub use context::MigrationContext;
pub use convert::{
    convert_issue, convert_version, IssueMeta, IssuePayload, MilestoneMeta, MilestonePayload,
};
pub use error::{ConvertError, Result};
pub use journal::{journal_events, NoteMeta, NotePayload, StateEvent, CONVERSION_FALLBACK};
pub use markup::{MarkupConverter, MarkupError, Verbatim};
pub use models::{
    gitlab_milestone_index, gitlab_user_index, issue_status_index, redmine_user_index,
    GitlabMilestone, GitlabMilestoneIndex, GitlabUser, GitlabUserIndex, IssueRelation, IssueStatus,
    IssueStatusIndex, JournalDetail, JournalEntry, NamedRef, RedmineIssue, RedmineUser,
    RedmineUserIndex, RedmineVersion,
};
