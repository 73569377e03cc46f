//! Voice and model catalog operations.

use reqwest::Method;
use serde_json::Value;

use super::BolnaClient;
use crate::error::BolnaResult;
use crate::types::{Model, Voice};
use crate::{TRACING_TARGET_API, fallback};

impl BolnaClient {
    /// Lists the voices available to the scoped account.
    ///
    /// Falls back to the built-in catalog when the account has no voices
    /// route.
    pub async fn list_voices(&self) -> BolnaResult<Vec<Voice>> {
        match self.get_json("voices").await {
            Ok(voices) => Ok(voices),
            Err(err) if err.is_not_found() => {
                tracing::debug!(target: TRACING_TARGET_API, "voices unavailable, using built-ins");
                Ok(fallback::default_voices())
            }
            Err(err) => Err(err),
        }
    }

    /// Lists the language models available to the scoped account.
    ///
    /// Falls back to the built-in catalog when the account has no models
    /// route.
    pub async fn list_models(&self) -> BolnaResult<Vec<Model>> {
        match self.get_json("models/all").await {
            Ok(models) => Ok(models),
            Err(err) if err.is_not_found() => {
                tracing::debug!(target: TRACING_TARGET_API, "models unavailable, using built-ins");
                Ok(fallback::default_models())
            }
            Err(err) => Err(err),
        }
    }

    /// Registers a custom model endpoint for agent conversations.
    pub async fn register_custom_model(&self, payload: &Value) -> BolnaResult<Value> {
        self.send_json(Method::POST, "models/custom", payload).await
    }
}
