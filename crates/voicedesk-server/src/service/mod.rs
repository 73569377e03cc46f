//! Application state and dependency injection.

mod config;
mod provider;
mod security;
mod sync;
mod webhook_verifier;

use voicedesk_postgres::PgClient;

pub use crate::service::config::ServiceConfig;
pub use crate::service::provider::ProviderGateway;
pub use crate::service::security::{AuthHasher, SessionKeys, SessionKeysConfig};
pub use crate::service::sync::{SyncReport, SyncService};
pub use crate::service::webhook_verifier::WebhookVerifier;
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    // External services:
    pub postgres: PgClient,
    pub provider: ProviderGateway,

    // Internal services:
    pub sync: SyncService,
    pub auth_hasher: AuthHasher,
    pub session_keys: SessionKeys,
    pub webhook_verifier: WebhookVerifier,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to the database, loads signing keys, and wires up the
    /// internal services.
    pub async fn new(service_config: ServiceConfig) -> Result<Self> {
        let postgres = service_config.connect_postgres().await?;
        let session_keys = service_config.load_session_keys().await?;

        let provider = ProviderGateway::new(
            postgres.clone(),
            service_config.bolna_base_url.clone(),
        );
        let sync = SyncService::new(
            postgres.clone(),
            provider.clone(),
            service_config.purge_test_users,
        );

        let service_state = Self {
            postgres,
            provider,
            sync,
            auth_hasher: AuthHasher::new(),
            session_keys,
            webhook_verifier: WebhookVerifier::new(service_config.webhook_secret),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(postgres: PgClient);
impl_di!(provider: ProviderGateway);

// Internal services:
impl_di!(sync: SyncService);
impl_di!(auth_hasher: AuthHasher);
impl_di!(session_keys: SessionKeys);
impl_di!(webhook_verifier: WebhookVerifier);
