//! Batch calling operations.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::BolnaResult;
use crate::types::{BatchFile, BolnaBatch};

impl BolnaClient {
    /// Creates a batch call job from an uploaded CSV contact list.
    pub async fn create_batch(&self, agent_id: &str, file: BatchFile) -> BolnaResult<Value> {
        tracing::debug!(
            target: TRACING_TARGET_API,
            agent_id,
            file_name = %file.file_name,
            "creating call batch"
        );

        let part = Part::bytes(file.content)
            .file_name(file.file_name)
            .mime_str("text/csv")?;
        let form = Form::new()
            .text("agent_id", agent_id.to_owned())
            .part("file", part);

        let request = self.request(Method::POST, "batches")?.multipart(form);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Lists an agent's batch jobs.
    pub async fn list_batches(&self, agent_id: &str) -> BolnaResult<Vec<BolnaBatch>> {
        let request = self
            .request(Method::GET, "batches/all")?
            .query(&[("agent_id", agent_id)]);

        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Schedules a batch to start dialing at the given time.
    pub async fn schedule_batch(&self, batch_id: &str, scheduled_at: &str) -> BolnaResult<Value> {
        let payload = json!({ "scheduled_at": scheduled_at });
        self.send_json(
            Method::POST,
            &format!("batches/{batch_id}/schedule"),
            &payload,
        )
        .await
    }

    /// Stops a running batch.
    pub async fn stop_batch(&self, batch_id: &str) -> BolnaResult<Value> {
        let request = self.request(Method::POST, &format!("batches/{batch_id}/stop"))?;
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Downloads a batch's results as raw CSV bytes.
    pub async fn download_batch(&self, batch_id: &str) -> BolnaResult<Vec<u8>> {
        let request = self.request(Method::GET, &format!("batches/{batch_id}/download"))?;
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Deletes a batch job.
    pub async fn delete_batch(&self, batch_id: &str) -> BolnaResult<Value> {
        self.delete_json(&format!("batches/{batch_id}")).await
    }
}
