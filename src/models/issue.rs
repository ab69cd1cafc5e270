use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Represents one Redmine issue as returned by the issues endpoint with
/// journals and relations included, typed so downstream logic can rely on
/// which fields are optional instead of probing raw dicts.
#[derive(Debug, Deserialize, Clone)]
pub struct RedmineIssue {
    pub id: u64,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub tracker: NamedRef,
    pub status: NamedRef,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub author: Option<NamedRef>,
    #[serde(default)]
    pub assigned_to: Option<NamedRef>,
    #[serde(default)]
    pub fixed_version: Option<NamedRef>,
    pub created_on: String,
    #[serde(default)]
    pub closed_on: Option<String>,
    #[serde(default)]
    pub journals: Vec<JournalEntry>,
    #[serde(default)]
    pub relations: Vec<IssueRelation>,
}

impl RedmineIssue {
    /// Parses an issue from a raw Redmine API value.
    pub fn from_api(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Into::into)
    }
}

/// The `{id, name}` pair Redmine embeds for trackers, statuses, categories,
/// versions and users referenced from an issue.
#[derive(Debug, Deserialize, Clone)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalEntry {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub user: Option<NamedRef>,
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalDetail {
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IssueRelation {
    pub relation_type: String,
    pub issue_id: u64,
    pub issue_to_id: u64,
}
