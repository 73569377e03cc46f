//! Voice agent model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::agents;

/// Local cache of a voice agent managed on the upstream provider.
///
/// Rows are only created after the provider accepted the agent, and the
/// sync service deletes rows whose agent no longer exists upstream.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Agent {
    /// Unique local identifier.
    pub id: Uuid,
    /// Tenant owning this agent.
    pub tenant_id: Uuid,
    /// Agent id on the upstream provider, globally unique.
    pub bolna_agent_id: String,
    /// Human-readable agent name.
    pub agent_name: String,
    /// Free-form status label mirrored from the provider.
    pub status: String,
    /// Full agent configuration as sent to the provider.
    pub agent_config: serde_json::Value,
    /// Prompt payloads associated with the agent.
    pub agent_prompts: serde_json::Value,
    /// Timestamp when the row was created.
    pub created_at: Timestamp,
    /// Timestamp when the row was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new agent row.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAgent {
    /// Tenant owning this agent.
    pub tenant_id: Uuid,
    /// Agent id on the upstream provider.
    pub bolna_agent_id: String,
    /// Human-readable agent name.
    pub agent_name: String,
    /// Status label.
    pub status: Option<String>,
    /// Full agent configuration.
    pub agent_config: Option<serde_json::Value>,
    /// Prompt payloads.
    pub agent_prompts: Option<serde_json::Value>,
}

/// Data for updating an agent row.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = agents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateAgent {
    /// Human-readable agent name.
    pub agent_name: Option<String>,
    /// Status label.
    pub status: Option<String>,
    /// Full agent configuration.
    pub agent_config: Option<serde_json::Value>,
    /// Prompt payloads.
    pub agent_prompts: Option<serde_json::Value>,
}
