//! Phone number request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};
use voicedesk_postgres::model::NewPhoneNumber;

/// Request payload for registering a phone number with a tenant.
///
/// Registers the local row only; purchasing a number from the provider goes
/// through the proxy surface instead.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoneNumber {
    /// Number in E.164 format, e.g. `+14155550100`.
    #[validate(length(min = 4, max = 20), custom(function = "validate_e164"))]
    pub phone_number: String,
    /// Phone id on the upstream provider, when already known.
    #[validate(length(min = 1, max = 100))]
    pub bolna_phone_id: Option<String>,
    /// Initial status label; defaults to `active`.
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

impl CreatePhoneNumber {
    /// Converts this request into a [`NewPhoneNumber`] scoped to the session
    /// tenant.
    pub fn into_model(self, tenant_id: Uuid) -> NewPhoneNumber {
        NewPhoneNumber {
            tenant_id,
            bolna_phone_id: self.bolna_phone_id,
            phone_number: self.phone_number,
            status: self.status,
        }
    }
}

/// Checks for a leading `+` followed by digits only.
fn validate_e164(number: &str) -> Result<(), ValidationError> {
    let mut chars = number.chars();

    if chars.next() != Some('+') || !chars.all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("e164_format"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_e164_numbers() {
        let request = CreatePhoneNumber {
            phone_number: "+14155550100".to_owned(),
            bolna_phone_id: None,
            status: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_numbers_without_country_prefix() {
        let request = CreatePhoneNumber {
            phone_number: "4155550100".to_owned(),
            bolna_phone_id: None,
            status: None,
        };

        assert!(request.validate().is_err());
    }
}
