//! Execution history operations.

use reqwest::Method;
use serde_json::Value;

use super::BolnaClient;
use crate::error::BolnaResult;
use crate::types::{ExecutionFilters, ExecutionPage};

impl BolnaClient {
    /// Fetches one execution's full record.
    pub async fn get_execution(&self, execution_id: &str) -> BolnaResult<Value> {
        self.get_json(&format!("executions/{execution_id}")).await
    }

    /// Fetches one execution's raw conversation log.
    pub async fn get_execution_log(&self, execution_id: &str) -> BolnaResult<Value> {
        self.get_json(&format!("executions/{execution_id}/log"))
            .await
    }

    /// Fetches one page of an agent's execution history.
    ///
    /// `page_number` is 1-based. Filters serialize to query parameters and
    /// skip unset fields.
    pub async fn list_agent_executions(
        &self,
        agent_id: &str,
        page_number: usize,
        page_size: usize,
        filters: &ExecutionFilters,
    ) -> BolnaResult<ExecutionPage> {
        let request = self
            .request(Method::GET, &format!("agent/{agent_id}/executions"))?
            .query(&[("page_number", page_number), ("page_size", page_size)])
            .query(filters);

        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }
}
