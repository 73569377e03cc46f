//! Phone number and inbound IVR operations.

use reqwest::Method;
use serde_json::Value;

use super::BolnaClient;
use crate::TRACING_TARGET_API;
use crate::error::BolnaResult;
use crate::types::BolnaPhoneNumber;

impl BolnaClient {
    /// Lists the phone numbers provisioned on the scoped account.
    pub async fn list_phone_numbers(&self) -> BolnaResult<Vec<BolnaPhoneNumber>> {
        self.get_json("phone-numbers/all").await
    }

    /// Searches purchasable numbers. Query parameters pass through to the
    /// provider untouched.
    pub async fn search_phone_numbers(&self, params: &[(String, String)]) -> BolnaResult<Value> {
        let request = self
            .request(Method::GET, "phone-numbers/search")?
            .query(params);

        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// Purchases a phone number.
    pub async fn buy_phone_number(&self, payload: &Value) -> BolnaResult<Value> {
        tracing::debug!(target: TRACING_TARGET_API, "buying phone number");
        self.send_json(Method::POST, "phone-numbers/buy", payload)
            .await
    }

    /// Links an agent to a number for inbound calls.
    pub async fn setup_inbound(&self, payload: &Value) -> BolnaResult<Value> {
        self.send_json(Method::POST, "inbound/setup", payload).await
    }

    /// Unlinks an agent from its inbound number.
    pub async fn unlink_inbound(&self, payload: &Value) -> BolnaResult<Value> {
        self.send_json(Method::POST, "inbound/unlink", payload)
            .await
    }
}
