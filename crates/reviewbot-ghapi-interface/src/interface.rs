use async_trait::async_trait;

use crate::{
    types::{GhCollaboratorPermission, GhEvent, GhPullRequest, GhUser},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a pull request from its number, `None` if it does not exist.
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Option<GhPullRequest>>;
    /// List the most recent events of a repository (single page).
    async fn repository_events_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
    ) -> Result<Vec<GhEvent>>;
    /// List repository collaborators having at least a permission (single page).
    async fn collaborators_list(
        &self,
        owner: &str,
        name: &str,
        permission: GhCollaboratorPermission,
        per_page: u64,
    ) -> Result<Vec<GhUser>>;
    /// Add reviewers to a pull request.
    async fn pull_reviewer_requests_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<()>;
}
