//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Build an implementation error from a message.
    pub fn from_message<T: Into<String>>(message: T) -> Self {
        Self::ImplementationError {
            source: message.into().into(),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_is_transparent() {
        let error = ApiError::from_message("Insufficient permissions");
        assert_eq!(error.to_string(), "Insufficient permissions");
    }
}
