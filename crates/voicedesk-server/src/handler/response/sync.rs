//! Reconciliation response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::SyncReport;

/// Response for a full tenant reconciliation run.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    /// Local agent rows removed because the provider no longer lists them.
    pub deleted_agents: u64,
    /// Local phone number rows removed for the same reason.
    pub deleted_phone_numbers: u64,
    /// Stale user rows purged during the run.
    pub deleted_users: u64,
    /// Execution rows pulled from the provider's history.
    pub synced_executions: u64,
}

impl SyncOutcome {
    /// Creates a new instance of [`SyncOutcome`].
    pub fn from_report(report: SyncReport) -> Self {
        Self {
            deleted_agents: report.deleted_agents,
            deleted_phone_numbers: report.deleted_phone_numbers,
            deleted_users: report.deleted_users,
            synced_executions: report.synced_executions,
        }
    }
}

/// Response for an execution-only sync run.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSyncOutcome {
    /// Execution rows pulled from the provider's history.
    pub synced_executions: u64,
}

impl ExecutionSyncOutcome {
    /// Creates a new instance of [`ExecutionSyncOutcome`].
    pub fn new(synced_executions: u64) -> Self {
        Self { synced_executions }
    }
}
