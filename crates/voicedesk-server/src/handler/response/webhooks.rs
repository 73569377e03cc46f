//! Webhook ingestion response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an inbound provider notification changed local state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WebhookOutcome {
    /// A new execution row was created.
    Inserted,
    /// An existing row was refreshed in place.
    Updated,
}

/// Acknowledgement returned to the provider after ingesting a webhook.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReceipt {
    /// Local ID of the affected execution row.
    pub execution_id: Uuid,
    /// Whether the row was inserted or updated.
    pub outcome: WebhookOutcome,
}

impl WebhookReceipt {
    /// Creates a new instance of [`WebhookReceipt`].
    pub fn new(execution_id: Uuid, outcome: WebhookOutcome) -> Self {
        Self {
            execution_id,
            outcome,
        }
    }
}
