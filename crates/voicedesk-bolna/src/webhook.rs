//! Inbound webhook payload shapes.
//!
//! Bolna has shipped several webhook body layouts over time. [`WebhookEvent`]
//! enumerates the known shapes and deserializes them in priority order, so
//! ingestion never has to probe loosely typed JSON for ids.

use serde::Deserialize;

/// A webhook delivery from the provider, in one of its known layouts.
///
/// Variants are tried top to bottom: the flat layout wins over the nested
/// one, which wins over the legacy id-aliased one. Every variant carries the
/// provider execution id, the provider agent id, and optional call
/// artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WebhookEvent {
    /// Current layout: `{"execution_id": ..., "agent_id": ..., ...}`.
    Flat(FlatEvent),
    /// Nested layout: `{"execution": {"id": ...}, "agent_id": ...}`.
    Nested(NestedEvent),
    /// Legacy layout aliasing the execution id as `id`.
    Aliased(AliasedEvent),
}

/// Flat webhook body with both ids at the top level.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatEvent {
    /// Provider execution id.
    pub execution_id: String,
    /// Provider agent id.
    #[serde(alias = "bolna_agent_id")]
    pub agent_id: String,
    /// Call artifacts accompanying the event.
    #[serde(flatten)]
    pub details: CallDetails,
}

/// Webhook body nesting the execution under an `execution` object.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedEvent {
    /// The nested execution payload.
    pub execution: NestedExecution,
    /// Provider agent id.
    #[serde(alias = "bolna_agent_id")]
    pub agent_id: String,
}

/// The execution object inside a nested webhook body.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedExecution {
    /// Provider execution id.
    #[serde(alias = "execution_id")]
    pub id: String,
    /// Call artifacts accompanying the event.
    #[serde(flatten)]
    pub details: CallDetails,
}

/// Legacy webhook body using `id` for the execution id.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasedEvent {
    /// Provider execution id.
    pub id: String,
    /// Provider agent id.
    #[serde(alias = "bolna_agent_id")]
    pub agent_id: String,
    /// Call artifacts accompanying the event.
    #[serde(flatten)]
    pub details: CallDetails,
}

/// Call artifacts shared by every webhook layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallDetails {
    /// Full conversation transcript, when the call produced one.
    #[serde(default)]
    pub transcript: Option<String>,
    /// URL of the call recording, when available.
    #[serde(default, alias = "recording")]
    pub recording_url: Option<String>,
    /// Call duration in seconds. Some payloads report fractional seconds.
    #[serde(default, alias = "conversation_duration")]
    pub duration: Option<f64>,
}

impl CallDetails {
    /// Returns the call duration as whole seconds.
    pub fn duration_secs(&self) -> Option<i32> {
        self.duration.map(|secs| secs.round() as i32)
    }
}

impl WebhookEvent {
    /// Returns the provider execution id.
    pub fn execution_id(&self) -> &str {
        match self {
            Self::Flat(event) => &event.execution_id,
            Self::Nested(event) => &event.execution.id,
            Self::Aliased(event) => &event.id,
        }
    }

    /// Returns the provider agent id.
    pub fn agent_id(&self) -> &str {
        match self {
            Self::Flat(event) => &event.agent_id,
            Self::Nested(event) => &event.agent_id,
            Self::Aliased(event) => &event.agent_id,
        }
    }

    /// Returns the call artifacts carried by the event.
    pub fn details(&self) -> &CallDetails {
        match self {
            Self::Flat(event) => &event.details,
            Self::Nested(event) => &event.execution.details,
            Self::Aliased(event) => &event.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_payload() {
        let body = r#"{
            "execution_id": "exec-1",
            "agent_id": "agent-123",
            "transcript": "Hello world",
            "duration": 12
        }"#;

        let event: WebhookEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.execution_id(), "exec-1");
        assert_eq!(event.agent_id(), "agent-123");
        assert_eq!(event.details().transcript.as_deref(), Some("Hello world"));
        assert_eq!(event.details().duration_secs(), Some(12));
        assert!(matches!(event, WebhookEvent::Flat(_)));
    }

    #[test]
    fn parses_nested_payload() {
        let body = r#"{
            "execution": {
                "id": "exec-2",
                "recording": "https://cdn.example.com/rec.mp3",
                "conversation_duration": 23.6
            },
            "agent_id": "agent-123"
        }"#;

        let event: WebhookEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.execution_id(), "exec-2");
        assert_eq!(
            event.details().recording_url.as_deref(),
            Some("https://cdn.example.com/rec.mp3")
        );
        assert_eq!(event.details().duration_secs(), Some(24));
        assert!(matches!(event, WebhookEvent::Nested(_)));
    }

    #[test]
    fn parses_aliased_payload() {
        let body = r#"{"id": "exec-3", "bolna_agent_id": "agent-9"}"#;

        let event: WebhookEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.execution_id(), "exec-3");
        assert_eq!(event.agent_id(), "agent-9");
        assert!(event.details().transcript.is_none());
    }

    #[test]
    fn rejects_payload_without_ids() {
        let missing_agent = r#"{"execution_id": "exec-4", "transcript": "hi"}"#;
        assert!(serde_json::from_str::<WebhookEvent>(missing_agent).is_err());

        let missing_execution = r#"{"agent_id": "agent-123", "status": "completed"}"#;
        assert!(serde_json::from_str::<WebhookEvent>(missing_execution).is_err());

        assert!(serde_json::from_str::<WebhookEvent>("{}").is_err());
    }

    #[test]
    fn flat_layout_wins_over_aliased() {
        // Both ids present at the top level parses as the current layout
        // even when a legacy "id" field rides along.
        let body = r#"{"execution_id": "exec-5", "id": "legacy", "agent_id": "agent-1"}"#;

        let event: WebhookEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.execution_id(), "exec-5");
        assert!(matches!(event, WebhookEvent::Flat(_)));
    }
}
