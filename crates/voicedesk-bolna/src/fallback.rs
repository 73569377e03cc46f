//! Built-in catalogs for accounts without catalog API access.
//!
//! Some provider plans answer 404 on the model and voice listing routes.
//! The client substitutes these catalogs so agent configuration screens
//! always have something to offer.

use crate::types::{Model, Voice};

/// Returns the built-in voice catalog.
pub fn default_voices() -> Vec<Voice> {
    vec![
        Voice::builtin("Danielle", "polly", "en-US"),
        Voice::builtin("Joanna", "polly", "en-US"),
        Voice::builtin("Matthew", "polly", "en-US"),
        Voice::builtin("Amy", "polly", "en-GB"),
        Voice::builtin("Rachel", "elevenlabs", "en-US"),
        Voice::builtin("Adam", "elevenlabs", "en-US"),
        Voice::builtin("Asteria", "deepgram", "en-US"),
    ]
}

/// Returns the built-in language model catalog.
pub fn default_models() -> Vec<Model> {
    vec![
        Model::builtin("gpt-4o", "openai", "openai"),
        Model::builtin("gpt-4o-mini", "openai", "openai"),
        Model::builtin("gpt-4.1", "openai", "openai"),
        Model::builtin("claude-3-5-sonnet-20241022", "anthropic", "anthropic"),
        Model::builtin("llama-3.3-70b-versatile", "groq", "llama"),
        Model::builtin("deepseek-chat", "deepseek", "deepseek"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_never_empty() {
        assert!(!default_voices().is_empty());
        assert!(!default_models().is_empty());
    }

    #[test]
    fn catalog_entries_are_complete() {
        for voice in default_voices() {
            assert!(!voice.name.is_empty());
            assert!(!voice.provider.is_empty());
        }
        for model in default_models() {
            assert!(!model.model.is_empty());
            assert!(!model.provider.is_empty());
        }
    }
}
