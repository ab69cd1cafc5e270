//! Top-level record converters: Redmine issue → GitLab issue, Redmine
//! version → GitLab milestone. Each returns the literal creation-API
//! payload plus the metadata the submission layer turns into follow-up
//! calls (impersonation, forced close).

use chrono::DateTime;
use serde::Serialize;
use tracing::warn;

use crate::context::MigrationContext;
use crate::error::{ConvertError, Result};
use crate::format::relations_summary;
use crate::identity::{gitlab_uid_for, login_for_uid};
use crate::journal::{journal_events, NoteMeta, NotePayload};
use crate::models::{RedmineIssue, RedmineVersion};

/// Request body for the GitLab issue creation endpoint. Optional fields are
/// omitted entirely when unset rather than sent as `null`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IssuePayload {
    pub iid: u64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub labels: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
}

/// Everything about a converted issue that the creation endpoint does not
/// accept directly: the author to impersonate (`None` when unattributable),
/// the replayable journal events, and the forced terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueMeta {
    pub sudo_user: Option<String>,
    pub notes: Vec<(NotePayload, NoteMeta)>,
    pub must_close: bool,
    pub closed_at: Option<String>,
}

/// Request body for the GitLab milestone creation endpoint.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MilestonePayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneMeta {
    pub must_close: bool,
}

/// Converts one Redmine issue into the GitLab creation payload and its
/// submission metadata.
///
/// The Redmine id is preserved as the GitLab `iid`, labels combine tracker,
/// status and (when set) category names, and the description gains a
/// relation summary plus a back-reference link to the original issue. An
/// unresolvable author degrades to unattributed; an unresolvable assignee,
/// a version without an indexed milestone, or a description the markup
/// converter rejects fail the whole issue.
pub fn convert_issue(
    issue: &RedmineIssue,
    ctx: &MigrationContext<'_>,
) -> Result<(IssuePayload, IssueMeta)> {
    let mut relations_text = relations_summary(&issue.relations, issue.id);
    if !relations_text.is_empty() {
        relations_text.insert_str(0, ", ");
    }

    let mut labels = format!("{},{}", issue.tracker.name, issue.status.name);
    if let Some(category) = &issue.category {
        labels.push(',');
        labels.push_str(&category.name);
    }

    let description_body = ctx
        .markup
        .convert(issue.description.as_deref().unwrap_or(""))
        .map_err(|err| ConvertError::Markup(err.to_string()))?;
    let description = format!(
        "{}\n\n{}\n\n{}/issues/{}",
        description_body, relations_text, ctx.redmine_url, issue.id
    );

    let milestone_id = match &issue.fixed_version {
        Some(version) => {
            let milestone = ctx
                .gitlab_milestones
                .get(&version.name)
                .ok_or_else(|| ConvertError::UnknownMilestone(version.name.clone()))?;
            Some(milestone.id)
        }
        None => None,
    };

    let assignee_id = match &issue.assigned_to {
        Some(assignee) => Some(gitlab_uid_for(
            assignee.id,
            ctx.redmine_users,
            ctx.gitlab_users,
        )?),
        None => None,
    };

    let sudo_user = issue_author(issue, ctx);

    let notes = journal_events(
        &issue.journals,
        ctx.redmine_users,
        ctx.issue_statuses,
        ctx.markup,
    )
    .collect();

    let (must_close, closed_at) = match &issue.closed_on {
        Some(closed_on) => (true, Some(closed_on.clone())),
        None => (false, None),
    };

    let payload = IssuePayload {
        iid: issue.id,
        title: issue.subject.clone(),
        description,
        created_at: issue.created_on.clone(),
        labels,
        milestone_id,
        assignee_id,
    };
    let meta = IssueMeta {
        sudo_user,
        notes,
        must_close,
        closed_at,
    };
    Ok((payload, meta))
}

/// Converts one Redmine version into the GitLab milestone payload and its
/// submission metadata. Linking issues to the milestone is the caller's
/// follow-up once the milestone id exists.
pub fn convert_version(version: &RedmineVersion) -> (MilestonePayload, MilestoneMeta) {
    let payload = MilestonePayload {
        title: version.name.clone(),
        description: format!(
            "{}\n\n*(from redmine: created on {})*",
            version.description,
            date_only(&version.created_on)
        ),
        due_date: version.due_date.as_deref().map(date_only),
    };
    let meta = MilestoneMeta {
        must_close: version.status == "closed",
    };
    (payload, meta)
}

fn issue_author(issue: &RedmineIssue, ctx: &MigrationContext<'_>) -> Option<String> {
    let author = match issue.author.as_ref() {
        Some(author) => author,
        None => {
            warn!(
                issue = issue.id,
                "redmine issue has no author, attributing it to current admin"
            );
            return None;
        }
    };
    match login_for_uid(author.id, ctx.redmine_users) {
        Ok(login) => Some(login),
        Err(_) => {
            warn!(
                issue = issue.id,
                "redmine issue is anonymous, attributing it to current admin"
            );
            None
        }
    }
}

/// Truncates an RFC 3339 timestamp to its calendar date; plain `YYYY-MM-DD`
/// strings pass through unchanged.
fn date_only(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.date_naive().to_string(),
        Err(_) => timestamp.chars().take(10).collect(),
    }
}
