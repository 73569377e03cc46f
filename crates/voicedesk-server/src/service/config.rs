//! Service configuration and external service bootstrapping.

#[cfg(any(test, feature = "config"))]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;
use voicedesk_bolna::BolnaConfig;
use voicedesk_postgres::{PgClient, PgConfig, run_pending_migrations};

use crate::service::{SessionKeys, SessionKeysConfig};
use crate::{Error, Result};

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Postgres connection and pool settings.
    #[cfg_attr(any(test, feature = "config"), clap(flatten))]
    #[serde(flatten)]
    pub postgres_config: PgConfig,

    /// Session signing key file paths.
    #[cfg_attr(any(test, feature = "config"), clap(flatten))]
    #[serde(flatten)]
    pub session_keys_config: SessionKeysConfig,

    /// Base URL of the upstream voice provider REST API.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "BOLNA_BASE_URL", default_value = "https://api.bolna.ai")
    )]
    #[serde(default = "ServiceConfig::default_bolna_base_url")]
    pub bolna_base_url: Url,

    /// Shared secret for webhook signature verification.
    ///
    /// When unset, webhook signatures are not checked.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "BOLNA_WEBHOOK_SECRET")
    )]
    #[serde(default)]
    pub webhook_secret: Option<String>,

    /// Enables deletion of stale and test users during tenant sync.
    ///
    /// A staging-environment hygiene switch; leave off in production.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "PURGE_TEST_USERS", default_value_t = false)
    )]
    #[serde(default)]
    pub purge_test_users: bool,
}

impl ServiceConfig {
    fn default_bolna_base_url() -> Url {
        BolnaConfig::default_base_url()
    }

    /// Connects to the Postgres database and applies pending migrations.
    pub async fn connect_postgres(&self) -> Result<PgClient> {
        let pg_client = PgClient::new(self.postgres_config.clone()).map_err(|e| {
            Error::internal("postgres", "Failed to create database client").with_source(e)
        })?;

        run_pending_migrations(&pg_client).await.map_err(|e| {
            Error::internal("postgres", "Failed to apply database migrations").with_source(e)
        })?;

        Ok(pg_client)
    }

    /// Loads session signing keys from the configured paths.
    pub async fn load_session_keys(&self) -> Result<SessionKeys> {
        SessionKeys::from_config(&self.session_keys_config).await
    }
}
