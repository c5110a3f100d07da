use reviewbot_ghapi_interface::ApiError;

/// GitHub adapter error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    /// Non-success response, carrying the message sent by GitHub.
    #[error("{message}")]
    ResponseError { status: u16, message: String },

    #[error("Invalid authentication token: {source}")]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
