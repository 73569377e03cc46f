//! Batch calling request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for scheduling an uploaded batch.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBatch {
    /// Start time in ISO 8601, relayed to the provider unchanged.
    #[validate(length(min = 1, max = 64))]
    pub scheduled_at: String,
}
