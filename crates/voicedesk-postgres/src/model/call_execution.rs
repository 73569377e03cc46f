//! Call execution model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::call_executions;

/// Record of a single call run by an agent.
///
/// Rows arrive through two paths: the sync service pulling execution
/// history from the provider, and webhook ingestion upserting on inbound
/// notifications. Both key on `bolna_execution_id`.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = call_executions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CallExecution {
    /// Unique local identifier.
    pub id: Uuid,
    /// Tenant owning this execution.
    pub tenant_id: Uuid,
    /// Agent that ran the call.
    pub agent_id: Uuid,
    /// Execution id on the upstream provider, globally unique.
    pub bolna_execution_id: String,
    /// Call transcript, if available.
    pub transcript: Option<String>,
    /// Recording URL, if available.
    pub recording_url: Option<String>,
    /// Call duration in seconds.
    pub duration_secs: Option<i32>,
    /// Timestamp when the row was created.
    pub created_at: Timestamp,
    /// Timestamp when the row was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new call execution row.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = call_executions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCallExecution {
    /// Tenant owning this execution.
    pub tenant_id: Uuid,
    /// Agent that ran the call.
    pub agent_id: Uuid,
    /// Execution id on the upstream provider.
    pub bolna_execution_id: String,
    /// Call transcript.
    pub transcript: Option<String>,
    /// Recording URL.
    pub recording_url: Option<String>,
    /// Call duration in seconds.
    pub duration_secs: Option<i32>,
}

/// Data for updating a call execution row.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = call_executions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCallExecution {
    /// Call transcript.
    pub transcript: Option<Option<String>>,
    /// Recording URL.
    pub recording_url: Option<Option<String>>,
    /// Call duration in seconds.
    pub duration_secs: Option<Option<i32>>,
}
