//! Bolna client module.
//!
//! The client is one cheaply clonable handle over a shared HTTP connection
//! pool. Tenant-scoped calls go through [`BolnaClient::for_subaccount`],
//! which stamps the provider's sub-account header on every request.

mod agents;
mod batches;
mod calls;
mod catalog;
mod executions;
mod knowledgebases;
mod numbers;
mod subaccounts;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::BolnaConfig;
use crate::error::{BolnaError, BolnaResult};
use crate::{TRACING_TARGET_API, TRACING_TARGET_CLIENT};

/// Header naming the provider sub-account a request acts on.
pub const SUBACCOUNT_HEADER: &str = "X-Sub-Account-Id";

/// Inner client that holds the HTTP client and configuration.
struct ClientInner {
    http: reqwest::Client,
    config: BolnaConfig,
}

/// HTTP client for the Bolna REST API.
///
/// Cloning is cheap; clones share the underlying connection pool. A clone
/// scoped with [`BolnaClient::for_subaccount`] acts on one tenant's
/// sub-account while reusing the shared credential.
#[derive(Clone)]
pub struct BolnaClient {
    inner: Arc<ClientInner>,
    subaccount_id: Option<String>,
}

impl std::fmt::Debug for BolnaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BolnaClient")
            .field("config", &self.inner.config)
            .field("subaccount_id", &self.subaccount_id)
            .finish_non_exhaustive()
    }
}

impl BolnaClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(mut config: BolnaConfig) -> BolnaResult<Self> {
        config.validate()?;

        // Url::join treats a base without a trailing slash as a file and
        // would drop its last path segment.
        if !config.base_url.path().ends_with('/') {
            let path = format!("{}/", config.base_url.path());
            config.base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            "created provider client"
        );

        let inner = ClientInner { http, config };
        Ok(Self {
            inner: Arc::new(inner),
            subaccount_id: None,
        })
    }

    /// Returns a clone of this client scoped to one provider sub-account.
    pub fn for_subaccount(&self, subaccount_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            subaccount_id: Some(subaccount_id.into()),
        }
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &BolnaConfig {
        &self.inner.config
    }

    /// Gets the sub-account this client is scoped to, if any.
    pub fn subaccount_id(&self) -> Option<&str> {
        self.subaccount_id.as_deref()
    }

    fn endpoint(&self, path: &str) -> BolnaResult<Url> {
        self.inner
            .config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| BolnaError::invalid_config(format!("invalid endpoint '{path}': {err}")))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> BolnaResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        let mut builder = self
            .inner
            .http
            .request(method, url)
            .bearer_auth(&self.inner.config.api_key);

        if let Some(subaccount_id) = &self.subaccount_id {
            builder = builder.header(SUBACCOUNT_HEADER, subaccount_id);
        }

        Ok(builder)
    }

    /// Sends a prepared request, turning non-success statuses into
    /// [`BolnaError::Http`] with the body preserved verbatim.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> BolnaResult<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            target: TRACING_TARGET_API,
            status = status.as_u16(),
            "provider request failed"
        );

        Err(BolnaError::Http { status, body })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BolnaResult<T> {
        let request = self.request(Method::GET, path)?;
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &serde_json::Value,
    ) -> BolnaResult<T> {
        let request = self.request(method, path)?.json(payload);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> BolnaResult<T> {
        let request = self.request(Method::DELETE, path)?;
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> BolnaClient {
        let config = BolnaConfig::new(base_url.parse().unwrap(), "bn-test-key");
        BolnaClient::new(config).unwrap()
    }

    #[test]
    fn joins_endpoints_against_base_url() {
        let client = client_for("https://api.bolna.ai");
        let url = client.endpoint("agent/all").unwrap();
        assert_eq!(url.as_str(), "https://api.bolna.ai/agent/all");

        let url = client.endpoint("/agent/all").unwrap();
        assert_eq!(url.as_str(), "https://api.bolna.ai/agent/all");
    }

    #[test]
    fn preserves_base_url_subpaths() {
        let client = client_for("https://gateway.internal/bolna");
        let url = client.endpoint("voices").unwrap();
        assert_eq!(url.as_str(), "https://gateway.internal/bolna/voices");
    }

    #[test]
    fn subaccount_scope_is_per_clone() {
        let shared = client_for("https://api.bolna.ai");
        let scoped = shared.for_subaccount("sa-1");

        assert_eq!(shared.subaccount_id(), None);
        assert_eq!(scoped.subaccount_id(), Some("sa-1"));
    }

    #[test]
    fn debug_masks_credentials() {
        let client = client_for("https://api.bolna.ai");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("bn-test-key"));
    }
}
