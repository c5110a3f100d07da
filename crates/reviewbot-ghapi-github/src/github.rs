//! GitHub adapter

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{
    types::{GhCollaboratorPermission, GhEvent, GhPullRequest, GhUser},
    ApiService, Result,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    token: String,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new<T: Into<String>>(config: Config, token: T) -> Self {
        Self {
            config,
            token: token.into(),
        }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config, &self.token)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn check_response(response: Response) -> Result<Response, GitHubError> {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: String,
        }

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(GitHubError::ResponseError {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Option<GhPullRequest>, GitHubError> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(Self::check_response(response).await?.json().await?))
    }

    async fn fetch_repository_events(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
    ) -> Result<Vec<GhEvent>, GitHubError> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/events")))
            .query(&[("per_page", per_page)])
            .send()
            .await?;

        Ok(Self::check_response(response).await?.json().await?)
    }

    async fn fetch_collaborators(
        &self,
        owner: &str,
        name: &str,
        permission: GhCollaboratorPermission,
        per_page: u64,
    ) -> Result<Vec<GhUser>, GitHubError> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/collaborators")))
            .query(&[
                ("permission", permission.to_str().to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        Ok(Self::check_response(response).await?.json().await?)
    }

    async fn post_reviewer_requests(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<(), GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            reviewers: &'a [String],
        }

        let response = self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{issue_number}/requested_reviewers"
            )))
            .json(&Request { reviewers })
            .send()
            .await?;

        Self::check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Option<GhPullRequest>> {
        Ok(self.fetch_pull_request(owner, name, issue_number).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn repository_events_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
    ) -> Result<Vec<GhEvent>> {
        Ok(self.fetch_repository_events(owner, name, per_page).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn collaborators_list(
        &self,
        owner: &str,
        name: &str,
        permission: GhCollaboratorPermission,
        per_page: u64,
    ) -> Result<Vec<GhUser>> {
        Ok(self
            .fetch_collaborators(owner, name, permission, per_page)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_reviewer_requests_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<()> {
        Ok(self
            .post_reviewer_requests(owner, name, issue_number, reviewers)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn build_url() {
        let service = GithubApiService::new(Config::default(), "token");
        assert_eq!(
            service.build_url("/repos/me/test/pulls/1".into()),
            "https://api.github.com/repos/me/test/pulls/1"
        );
    }

    #[tokio::test]
    async fn invalid_token_fails_before_sending() {
        let service = GithubApiService::new(Config::default(), "bad\ntoken");
        let error = service.pulls_get("me", "test", 1).await.unwrap_err();

        assert!(error.to_string().starts_with("Invalid authentication token"));
    }
}
