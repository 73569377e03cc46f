//! Outbound call operations.

use reqwest::Method;
use serde_json::Value;

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::BolnaResult;

impl BolnaClient {
    /// Places an outbound call through one of the account's agents.
    pub async fn make_call(&self, payload: &Value) -> BolnaResult<Value> {
        tracing::debug!(target: TRACING_TARGET_API, "placing outbound call");
        self.send_json(Method::POST, "call", payload).await
    }

    /// Stops one in-flight call by its execution id.
    pub async fn stop_call(&self, execution_id: &str) -> BolnaResult<Value> {
        let request = self.request(Method::POST, &format!("call/{execution_id}/stop"))?;
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Stops every queued call for an agent.
    pub async fn stop_agent_calls(&self, agent_id: &str) -> BolnaResult<Value> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            agent_id,
            "stopping queued agent calls"
        );

        let request = self.request(Method::POST, &format!("agent/{agent_id}/stop"))?;
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }
}
