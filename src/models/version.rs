use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Represents a Redmine version (release container), the source side of a
/// GitLab milestone. The API omits `due_date` for versions without one.
#[derive(Debug, Deserialize, Clone)]
pub struct RedmineVersion {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    pub created_on: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl RedmineVersion {
    /// Parses a version from a raw Redmine API value.
    pub fn from_api(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Into::into)
    }
}
