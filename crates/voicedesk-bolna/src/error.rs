//! Error types for voicedesk-bolna.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for voicedesk-bolna operations.
pub type BolnaResult<T> = std::result::Result<T, BolnaError>;

/// Error type for the voicedesk-bolna library.
#[derive(Debug, Error)]
pub enum BolnaError {
    /// No provider API key has been stored yet.
    #[error("voice provider is not configured")]
    NotConfigured,

    /// The caller supplied an invalid combination of inputs.
    #[error("{0}")]
    InvalidInput(String),

    /// The provider answered with a non-success status.
    ///
    /// Carries the upstream status and response body verbatim so callers
    /// can relay both to their own clients.
    #[error("provider returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The HTTP request itself failed.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A provider response could not be decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BolnaError {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns true when the provider answered 404 for this request.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_not_found_responses() {
        let missing = BolnaError::Http {
            status: StatusCode::NOT_FOUND,
            body: "no such agent".to_owned(),
        };
        assert!(missing.is_not_found());

        let denied = BolnaError::Http {
            status: StatusCode::FORBIDDEN,
            body: "nope".to_owned(),
        };
        assert!(!denied.is_not_found());
        assert!(!BolnaError::NotConfigured.is_not_found());
    }
}
