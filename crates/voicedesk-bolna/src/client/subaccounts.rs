//! Sub-account provisioning operations.

use reqwest::Method;
use serde_json::json;

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::BolnaResult;
use crate::types::CreatedSubaccount;

impl BolnaClient {
    /// Creates a provider sub-account for a new tenant.
    ///
    /// Not every provider plan allows programmatic sub-account creation;
    /// callers are expected to handle the rejection.
    pub async fn create_subaccount(&self, name: &str) -> BolnaResult<CreatedSubaccount> {
        let payload = json!({ "name": name });
        let created: CreatedSubaccount =
            self.send_json(Method::POST, "sub-account", &payload).await?;

        tracing::info!(
            target: TRACING_TARGET_API,
            subaccount_id = %created.subaccount_id,
            "created provider sub-account"
        );

        Ok(created)
    }
}
