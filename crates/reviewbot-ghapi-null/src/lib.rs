//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use reviewbot_ghapi_interface::{
    types::{GhCollaboratorPermission, GhEvent, GhPullRequest, GhUser},
    ApiService, Result,
};

/// Null API service.
///
/// Every pull request exists, is authored by `ghost` and has no reviewers;
/// repositories have no events and no collaborators.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Option<GhPullRequest>> {
        Ok(Some(GhPullRequest {
            number: issue_number,
            user: GhUser {
                login: "ghost".into(),
            },
            ..Default::default()
        }))
    }

    #[tracing::instrument(skip(self), ret)]
    async fn repository_events_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
    ) -> Result<Vec<GhEvent>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn collaborators_list(
        &self,
        owner: &str,
        name: &str,
        permission: GhCollaboratorPermission,
        per_page: u64,
    ) -> Result<Vec<GhUser>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self))]
    async fn pull_reviewer_requests_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<()> {
        Ok(())
    }
}
