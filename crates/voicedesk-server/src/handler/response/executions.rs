//! Call execution response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;

/// Locally stored call execution response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Local ID of the execution.
    pub execution_id: Uuid,
    /// Tenant owning this execution.
    pub tenant_id: Uuid,
    /// Agent that ran the call.
    pub agent_id: Uuid,
    /// Execution id on the upstream provider.
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

impl Execution {
    /// Creates a new instance of [`Execution`].
    pub fn from_model(execution: model::CallExecution) -> Self {
        Self {
            execution_id: execution.id,
            tenant_id: execution.tenant_id,
            agent_id: execution.agent_id,
            bolna_execution_id: execution.bolna_execution_id,
            transcript: execution.transcript,
            recording_url: execution.recording_url,
            duration_secs: execution.duration_secs,
            created_at: execution.created_at.into(),
            updated_at: execution.updated_at.into(),
        }
    }
}

/// Response for listing locally stored executions.
pub type Executions = Vec<Execution>;
