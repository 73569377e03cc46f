//! Knowledgebase payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A knowledgebase (RAG corpus) attached to the provider account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Knowledgebase {
    /// Provider knowledgebase id.
    #[serde(alias = "rag_id", alias = "kb_id")]
    pub id: String,
    /// Ingestion status, e.g. `processing` or `ready`.
    #[serde(default)]
    pub status: Option<String>,
    /// Original file name for uploaded sources.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An uploaded document destined for a new knowledgebase.
#[derive(Debug, Clone)]
pub struct KnowledgebaseFile {
    /// File name reported to the provider.
    pub file_name: String,
    /// Raw file contents.
    pub content: Vec<u8>,
}

impl KnowledgebaseFile {
    /// Creates an upload from a file name and its contents.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rag_id_alias() {
        let kb: Knowledgebase =
            serde_json::from_str(r#"{"rag_id": "kb-7", "status": "ready"}"#).unwrap();
        assert_eq!(kb.id, "kb-7");
        assert_eq!(kb.status.as_deref(), Some("ready"));
    }
}
