//! Agent management operations.

use reqwest::Method;
use serde_json::Value;

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::BolnaResult;
use crate::types::{BolnaAgent, CreatedAgent};

impl BolnaClient {
    /// Lists every agent on the scoped account.
    pub async fn list_agents(&self) -> BolnaResult<Vec<BolnaAgent>> {
        self.get_json("agent/all").await
    }

    /// Creates an agent from a full provider configuration payload.
    pub async fn create_agent(&self, payload: &Value) -> BolnaResult<CreatedAgent> {
        let created: CreatedAgent = self.send_json(Method::POST, "agent", payload).await?;

        tracing::debug!(
            target: TRACING_TARGET_API,
            agent_id = %created.agent_id,
            "created provider agent"
        );

        Ok(created)
    }

    /// Fetches one agent's full configuration.
    pub async fn get_agent(&self, agent_id: &str) -> BolnaResult<Value> {
        self.get_json(&format!("agent/{agent_id}")).await
    }

    /// Replaces an agent's configuration.
    pub async fn update_agent(&self, agent_id: &str, payload: &Value) -> BolnaResult<Value> {
        self.send_json(Method::PUT, &format!("agent/{agent_id}"), payload)
            .await
    }

    /// Deletes an agent from the provider account.
    pub async fn delete_agent(&self, agent_id: &str) -> BolnaResult<Value> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            agent_id,
            "deleting provider agent"
        );

        self.delete_json(&format!("agent/{agent_id}")).await
    }
}
