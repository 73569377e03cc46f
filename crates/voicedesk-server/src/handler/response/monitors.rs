//! Health check response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voicedesk_postgres::PgPoolStatus;

/// Connection pool snapshot reported by the health endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealth {
    /// Connections currently open.
    pub size: usize,
    /// Connections idle and ready.
    pub available: usize,
    /// Callers waiting for a connection.
    pub waiting: usize,
    /// Configured pool capacity.
    pub max_size: usize,
}

impl DatabaseHealth {
    /// Creates a new instance of [`DatabaseHealth`].
    pub fn from_status(status: PgPoolStatus) -> Self {
        Self {
            size: status.size,
            available: status.available,
            waiting: status.waiting,
            max_size: status.max_size,
        }
    }
}

/// Response for the liveness endpoint.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Static readiness marker.
    pub status: String,
    /// Database pool snapshot.
    pub database: DatabaseHealth,
}

impl HealthStatus {
    /// Creates a new instance of [`HealthStatus`].
    pub fn new(status: PgPoolStatus) -> Self {
        Self {
            status: "ok".to_owned(),
            database: DatabaseHealth::from_status(status),
        }
    }
}
