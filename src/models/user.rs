//! User account records on both sides of the migration, plus the lookup
//! indexes joining them by login name.

use std::collections::HashMap;

use serde::Deserialize;

/// Represents a Redmine user account. `login` is the join key towards the
/// GitLab side; deleted or locked accounts may legitimately be missing from
/// the index built over these.
#[derive(Debug, Deserialize, Clone)]
pub struct RedmineUser {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitlabUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

pub type RedmineUserIndex = HashMap<u64, RedmineUser>;
pub type GitlabUserIndex = HashMap<String, GitlabUser>;

/// Builds the id-keyed Redmine user index.
pub fn redmine_user_index<I>(users: I) -> RedmineUserIndex
where
    I: IntoIterator<Item = RedmineUser>,
{
    users.into_iter().map(|user| (user.id, user)).collect()
}

/// Builds the username-keyed GitLab user index.
pub fn gitlab_user_index<I>(users: I) -> GitlabUserIndex
where
    I: IntoIterator<Item = GitlabUser>,
{
    users
        .into_iter()
        .map(|user| (user.username.clone(), user))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{gitlab_user_index, redmine_user_index, GitlabUser, RedmineUser};

    fn redmine_user(id: u64, login: &str) -> RedmineUser {
        RedmineUser {
            id,
            login: login.to_string(),
            firstname: None,
            lastname: None,
            mail: None,
        }
    }

    #[test]
    fn redmine_index_is_keyed_by_id() {
        let index = redmine_user_index([redmine_user(3, "alice"), redmine_user(9, "bob")]);
        assert_eq!(index[&9].login, "bob");
    }

    #[test]
    fn gitlab_index_is_keyed_by_username() {
        let index = gitlab_user_index([GitlabUser {
            id: 7,
            username: "alice".to_string(),
            name: None,
            state: None,
        }]);
        assert_eq!(index["alice"].id, 7);
    }
}
