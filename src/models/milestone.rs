use std::collections::HashMap;

use serde::Deserialize;

/// Represents an already-created GitLab milestone, looked up by title when
/// an issue references the matching Redmine version.
#[derive(Debug, Deserialize, Clone)]
pub struct GitlabMilestone {
    pub id: u64,
    pub title: String,
}

pub type GitlabMilestoneIndex = HashMap<String, GitlabMilestone>;

pub fn gitlab_milestone_index<I>(milestones: I) -> GitlabMilestoneIndex
where
    I: IntoIterator<Item = GitlabMilestone>,
{
    milestones
        .into_iter()
        .map(|milestone| (milestone.title.clone(), milestone))
        .collect()
}
