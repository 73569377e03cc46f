//! Batch calling payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A batch call job attached to an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BolnaBatch {
    /// Provider batch id.
    #[serde(alias = "id")]
    pub batch_id: String,
    /// Batch lifecycle state, e.g. `created`, `scheduled` or `running`.
    #[serde(default)]
    pub status: Option<String>,
    /// Agent the batch dials through.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Scheduled start time, ISO 8601.
    #[serde(default)]
    pub scheduled_at: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An uploaded contact list destined for a new batch.
#[derive(Debug, Clone)]
pub struct BatchFile {
    /// File name reported to the provider.
    pub file_name: String,
    /// Raw CSV contents.
    pub content: Vec<u8>,
}

impl BatchFile {
    /// Creates an upload from a file name and its contents.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}
