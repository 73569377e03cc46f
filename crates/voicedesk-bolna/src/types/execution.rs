//! Call execution payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single call execution as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct AgentExecution {
    /// Provider execution id.
    #[serde(alias = "execution_id")]
    pub id: String,
    /// Provider agent id, when the payload carries one.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Call status, e.g. `completed` or `busy`.
    #[serde(default)]
    pub status: Option<String>,
    /// Conversation length in seconds, possibly fractional.
    #[serde(default)]
    pub conversation_duration: Option<f64>,
    /// Full conversation transcript.
    #[serde(default)]
    pub transcript: Option<String>,
    /// Recording URL when reported at the top level.
    #[serde(default)]
    pub recording_url: Option<String>,
    /// Telephony metadata, including the usual recording location.
    #[serde(default)]
    pub telephony_data: Option<TelephonyData>,
    /// Creation timestamp as reported by the provider.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Telephony metadata nested inside an execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct TelephonyData {
    /// Recording URL for the call.
    #[serde(default)]
    pub recording_url: Option<String>,
    /// Call direction, e.g. `outbound` or `inbound`.
    #[serde(default)]
    pub call_type: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentExecution {
    /// Returns the recording URL, preferring the telephony metadata over
    /// the top-level field.
    pub fn recording(&self) -> Option<&str> {
        self.telephony_data
            .as_ref()
            .and_then(|data| data.recording_url.as_deref())
            .or(self.recording_url.as_deref())
    }

    /// Returns the call duration as whole seconds.
    pub fn duration_secs(&self) -> Option<i32> {
        self.conversation_duration.map(|secs| secs.round() as i32)
    }
}

/// One page of an agent's execution history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ExecutionPage {
    /// Executions on this page.
    #[serde(default)]
    pub data: Vec<AgentExecution>,
    /// Total number of executions, when the provider reports it.
    #[serde(default)]
    pub total: Option<i64>,
    /// Whether more pages follow, when the provider reports it.
    #[serde(default)]
    pub has_more: Option<bool>,
}

impl ExecutionPage {
    /// Returns true when no further pages should be fetched.
    pub fn is_last(&self, page_size: usize) -> bool {
        match self.has_more {
            Some(has_more) => !has_more,
            None => self.data.len() < page_size,
        }
    }
}

/// Optional filters for execution history queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ExecutionFilters {
    /// Filter by call status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by call direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    /// Filter by telephony provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Inclusive lower bound on the execution date, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on the execution date, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_telephony_recording() {
        let body = r#"{
            "id": "exec-1",
            "recording_url": "https://cdn.example.com/top.mp3",
            "telephony_data": {"recording_url": "https://cdn.example.com/nested.mp3"}
        }"#;

        let execution: AgentExecution = serde_json::from_str(body).unwrap();
        assert_eq!(
            execution.recording(),
            Some("https://cdn.example.com/nested.mp3")
        );
    }

    #[test]
    fn rounds_fractional_durations() {
        let execution: AgentExecution =
            serde_json::from_str(r#"{"execution_id": "exec-2", "conversation_duration": 41.5}"#)
                .unwrap();
        assert_eq!(execution.duration_secs(), Some(42));
    }

    #[test]
    fn detects_last_page() {
        let mut page = ExecutionPage::default();
        assert!(page.is_last(100));

        page.has_more = Some(true);
        assert!(!page.is_last(100));

        page.has_more = None;
        page.data = vec![
            serde_json::from_str(r#"{"id": "exec-1"}"#).unwrap(),
            serde_json::from_str(r#"{"id": "exec-2"}"#).unwrap(),
        ];
        assert!(page.is_last(100));
        assert!(!page.is_last(2));
    }
}
