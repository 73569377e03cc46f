//! Voice and model catalog types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A synthetic voice offered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Voice {
    /// Display name of the voice.
    pub name: String,
    /// Text-to-speech provider backing the voice.
    pub provider: String,
    /// Provider-specific voice identifier.
    #[serde(default, alias = "voice_id")]
    pub id: Option<String>,
    /// Accent or locale of the voice.
    #[serde(default)]
    pub accent: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A language model selectable for agent conversations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Model {
    /// Model identifier passed to the provider.
    pub model: String,
    /// LLM vendor serving the model.
    pub provider: String,
    /// Model family, e.g. `openai`.
    #[serde(default)]
    pub family: Option<String>,
    /// Remaining provider fields, relayed verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Voice {
    /// Creates a catalog entry with just a name and provider.
    pub(crate) fn builtin(name: &str, provider: &str, accent: &str) -> Self {
        Self {
            name: name.to_owned(),
            provider: provider.to_owned(),
            id: None,
            accent: Some(accent.to_owned()),
            extra: Map::new(),
        }
    }
}

impl Model {
    /// Creates a catalog entry with just a model id and provider.
    pub(crate) fn builtin(model: &str, provider: &str, family: &str) -> Self {
        Self {
            model: model.to_owned(),
            provider: provider.to_owned(),
            family: Some(family.to_owned()),
            extra: Map::new(),
        }
    }
}
