//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required input is empty.
    #[error("Input '{name}' not supplied. Unable to continue.")]
    MissingInput { name: String },

    /// An input could not be parsed.
    #[error("Invalid value for '{name}': {value}")]
    InvalidInput { name: String, value: String },

    #[error("PR #{number} not found.")]
    PullRequestNotFound { number: u64 },

    #[error("Environment variable 'GITHUB_REPOSITORY' not supplied. Unable to continue.")]
    MissingRepository,

    /// Wraps [`reviewbot_models::RepositoryPathError`].
    #[error(transparent)]
    RepositoryPathError {
        source: reviewbot_models::RepositoryPathError,
    },

    /// Wraps [`reviewbot_ghapi_interface::ApiError`].
    #[error(transparent)]
    ApiError {
        source: reviewbot_ghapi_interface::ApiError,
    },
}

impl DomainError {
    pub(crate) fn missing_input(name: &str) -> Self {
        Self::MissingInput { name: name.into() }
    }

    pub(crate) fn invalid_input(name: &str, value: &str) -> Self {
        Self::InvalidInput {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<reviewbot_models::RepositoryPathError> for DomainError {
    fn from(e: reviewbot_models::RepositoryPathError) -> Self {
        Self::RepositoryPathError { source: e }
    }
}

impl From<reviewbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: reviewbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DomainError::missing_input("token").to_string(),
            "Input 'token' not supplied. Unable to continue."
        );
        assert_eq!(
            DomainError::invalid_input("number-of-reviewers", "two").to_string(),
            "Invalid value for 'number-of-reviewers': two"
        );
        assert_eq!(
            DomainError::PullRequestNotFound { number: 123 }.to_string(),
            "PR #123 not found."
        );
        assert_eq!(
            DomainError::from(reviewbot_ghapi_interface::ApiError::from_message("Bad credentials"))
                .to_string(),
            "Bad credentials"
        );
    }
}
