//! Maps Redmine user ids to GitLab accounts via the shared login name.

use crate::error::{ConvertError, Result};
use crate::models::{GitlabUserIndex, RedmineUserIndex};

/// Resolves a Redmine user id to its login, with any mail domain stripped
/// (text after the last `@`). Errs with `UnknownSourceUser` when the id is
/// not indexed; expected for anonymous or deleted accounts, so callers
/// attributing authorship recover from it.
pub fn login_for_uid(uid: u64, users: &RedmineUserIndex) -> Result<String> {
    let user = users
        .get(&uid)
        .ok_or(ConvertError::UnknownSourceUser(uid))?;
    let login = match user.login.rfind('@') {
        Some(at) => &user.login[..at],
        None => user.login.as_str(),
    };
    Ok(login.to_string())
}

/// Resolves a Redmine user id all the way to the GitLab numeric id. A login
/// without a GitLab counterpart errs with `UnmappedIdentity`; there is no
/// recovery for that where an id is required.
pub fn gitlab_uid_for(
    uid: u64,
    users: &RedmineUserIndex,
    gitlab_users: &GitlabUserIndex,
) -> Result<u64> {
    let login = login_for_uid(uid, users)?;
    gitlab_users
        .get(&login)
        .map(|user| user.id)
        .ok_or(ConvertError::UnmappedIdentity(login))
}
