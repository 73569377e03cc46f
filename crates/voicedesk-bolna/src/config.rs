//! Bolna client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{BolnaError, BolnaResult};

/// Default timeout for provider HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Bolna HTTP client.
///
/// The API key is a shared platform credential, so [`Debug`] masks it.
#[derive(Clone)]
pub struct BolnaConfig {
    /// Base URL of the Bolna REST API.
    pub base_url: Url,
    /// Bearer token authenticating every request.
    pub api_key: String,
    /// Timeout applied to each provider request.
    pub timeout: Duration,
    /// User-Agent header to send with requests.
    pub user_agent: String,
}

impl BolnaConfig {
    /// Creates a configuration for the given endpoint and credential.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
        }
    }

    /// Returns the default public API endpoint.
    pub fn default_base_url() -> Url {
        "https://api.bolna.ai".parse().expect("valid default URL")
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("voicedesk-bolna/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint scheme is not HTTP(S), the API key
    /// is empty, or the timeout is zero.
    pub fn validate(&self) -> BolnaResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(BolnaError::invalid_config(format!(
                "unsupported endpoint scheme '{}'",
                self.base_url.scheme()
            )));
        }

        if self.api_key.trim().is_empty() {
            return Err(BolnaError::invalid_config("API key must not be empty"));
        }

        if self.timeout.is_zero() {
            return Err(BolnaError::invalid_config(
                "request timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for BolnaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BolnaConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_configuration() {
        let config = BolnaConfig::new(BolnaConfig::default_base_url(), "bn-live-key")
            .with_timeout(Duration::from_secs(10));
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url.as_str(), "https://api.bolna.ai/");
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = BolnaConfig::new(BolnaConfig::default_base_url(), "  ");
        assert!(config.validate().is_err());

        let config = BolnaConfig::new(BolnaConfig::default_base_url(), "bn-live-key")
            .with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());

        let config = BolnaConfig::new("file:///etc/passwd".parse().unwrap(), "bn-live-key");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_masks_api_key() {
        let config = BolnaConfig::new(BolnaConfig::default_base_url(), "bn-live-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("bn-live-secret"));
        assert!(rendered.contains("***"));
    }
}
