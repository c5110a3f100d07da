use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Requested reviewers.
    #[serde(default)]
    pub requested_reviewers: Vec<GhUser>,
    /// Draft.
    #[serde(default)]
    pub draft: bool,
}

impl GhPullRequest {
    /// Logins of the users whose review is already requested.
    pub fn requested_reviewer_logins(&self) -> Vec<String> {
        self.requested_reviewers
            .iter()
            .map(|u| u.login.clone())
            .collect()
    }
}
