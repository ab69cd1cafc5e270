//! Error model shared by all conversion entry points.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Represents the failure conditions a single record conversion can hit:
/// unresolvable identities, a version referencing an unindexed milestone,
/// markup conversion failures without a defined fallback, and malformed
/// raw API records.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("redmine user {0} is not in the user index")]
    UnknownSourceUser(u64),
    #[error("login {0:?} has no gitlab account")]
    UnmappedIdentity(String),
    #[error("no gitlab milestone titled {0:?}")]
    UnknownMilestone(String),
    #[error("markup conversion failed: {0}")]
    Markup(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl From<serde_json::Error> for ConvertError {
    /// Converts raw-record decode failures into invalid-record errors.
    fn from(err: serde_json::Error) -> Self {
        ConvertError::InvalidRecord(err.to_string())
    }
}
