//! Credential store request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use voicedesk_postgres::model::NewApiCredential;

/// Request payload to store or rotate a shared credential.
///
/// The value is write-only: no read endpoint ever returns it.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoreCredential {
    /// Name of the credential, e.g. `bolna_api_key` (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub key: String,
    /// Secret value (1-500 characters).
    #[validate(length(min = 1, max = 500))]
    pub value: String,
}

impl StoreCredential {
    pub fn into_model(self) -> NewApiCredential {
        NewApiCredential {
            key: self.key,
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_values() {
        let request = StoreCredential {
            key: "bolna_api_key".to_owned(),
            value: String::new(),
        };

        assert!(request.validate().is_err());
    }
}
