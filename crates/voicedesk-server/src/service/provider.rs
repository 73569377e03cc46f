//! Shared upstream provider client management.
//!
//! The platform API key lives in the database credential store and can be
//! rotated at runtime, so the provider HTTP client is built lazily on first
//! use and cached until the key changes.

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;
use url::Url;
use voicedesk_bolna::{BolnaClient, BolnaConfig, BolnaError};
use voicedesk_postgres::PgClient;
use voicedesk_postgres::model::{BOLNA_API_KEY, Tenant};
use voicedesk_postgres::query::ApiCredentialRepository;

use crate::handler;

/// Tracing target for provider gateway operations.
const TRACING_TARGET: &str = "voicedesk_server::service::provider";

/// Lazily-built, shared handle to the upstream voice provider.
///
/// Clones share the cached client through an `Arc`, so the credential is
/// read from the database at most once per process until
/// [`ProviderGateway::invalidate`] is called.
#[derive(Clone)]
pub struct ProviderGateway {
    inner: Arc<ProviderGatewayInner>,
}

struct ProviderGatewayInner {
    postgres: PgClient,
    base_url: Url,
    client: RwLock<Option<BolnaClient>>,
}

impl ProviderGateway {
    /// Creates a gateway that reads its credential on first use.
    pub fn new(postgres: PgClient, base_url: Url) -> Self {
        Self {
            inner: Arc::new(ProviderGatewayInner {
                postgres,
                base_url,
                client: RwLock::new(None),
            }),
        }
    }

    /// Returns the platform-scoped provider client.
    ///
    /// # Errors
    ///
    /// Answers 502 when no API key has been stored yet, so operators can
    /// tell "store a key" apart from a genuine server fault.
    pub async fn client(&self) -> handler::Result<BolnaClient> {
        if let Some(client) = self.inner.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut conn = self.inner.postgres.get_connection().await?;
        let Some(credential) = conn.get_credential(BOLNA_API_KEY).await? else {
            return Err(BolnaError::NotConfigured.into());
        };

        let config = BolnaConfig::new(self.inner.base_url.clone(), credential.value);
        let client = BolnaClient::new(config).map_err(handler::Error::from)?;

        tracing::info!(
            target: TRACING_TARGET,
            base_url = %self.inner.base_url,
            "provider client initialized from stored credential"
        );

        let mut cached = self.inner.client.write().await;
        *cached = Some(client.clone());

        Ok(client)
    }

    /// Returns a provider client scoped to one tenant's sub-account.
    ///
    /// Every request made through the returned client carries the tenant's
    /// sub-account header, so upstream resources stay partitioned per tenant.
    pub async fn for_tenant(&self, tenant: &Tenant) -> handler::Result<BolnaClient> {
        let client = self.client().await?;
        Ok(client.for_subaccount(tenant.bolna_subaccount_id.clone()))
    }

    /// Drops the cached client so the next call re-reads the credential.
    ///
    /// Called after the platform API key is rotated.
    pub async fn invalidate(&self) {
        *self.inner.client.write().await = None;

        tracing::debug!(
            target: TRACING_TARGET,
            "provider client cache invalidated"
        );
    }

    /// Returns the base URL requests are sent to.
    #[inline]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

impl fmt::Debug for ProviderGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderGateway")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}
