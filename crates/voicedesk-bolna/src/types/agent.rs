//! Agent payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A voice agent as listed by the provider.
///
/// Only the fields the platform consumes are typed; everything else rides
/// along in `extra` and is relayed to API clients untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct BolnaAgent {
    /// Provider agent id.
    #[serde(alias = "id")]
    pub agent_id: String,
    /// Human-readable agent name.
    #[serde(default)]
    pub agent_name: Option<String>,
    /// Lifecycle state reported by the provider.
    #[serde(default)]
    pub agent_status: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response to a successful agent creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CreatedAgent {
    /// Provider id assigned to the new agent.
    #[serde(alias = "id")]
    pub agent_id: String,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_agent_with_passthrough_fields() {
        let body = r#"{
            "agent_id": "agent-123",
            "agent_name": "Support line",
            "agent_type": "other",
            "tasks": [{"task_type": "conversation"}]
        }"#;

        let agent: BolnaAgent = serde_json::from_str(body).unwrap();
        assert_eq!(agent.agent_id, "agent-123");
        assert_eq!(agent.agent_name.as_deref(), Some("Support line"));
        assert!(agent.extra.contains_key("tasks"));

        let round_tripped = serde_json::to_value(&agent).unwrap();
        assert_eq!(round_tripped["agent_type"], "other");
    }

    #[test]
    fn accepts_id_alias_on_creation() {
        let created: CreatedAgent =
            serde_json::from_str(r#"{"id": "agent-9", "state": "created"}"#).unwrap();
        assert_eq!(created.agent_id, "agent-9");
        assert_eq!(created.extra["state"], "created");
    }
}
