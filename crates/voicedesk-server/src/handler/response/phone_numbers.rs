//! Phone number response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;

/// Phone number response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Local ID of the phone number.
    pub phone_number_id: Uuid,
    /// Tenant owning this number.
    pub tenant_id: Uuid,
    /// Phone id on the upstream provider, if assigned.
    pub bolna_phone_id: Option<String>,
    /// Number in E.164 format.
    pub phone_number: String,
    /// Free-form status label.
    pub status: String,
    /// Timestamp when the row was created.
    pub created_at: Timestamp,
    /// Timestamp when the row was last updated.
    pub updated_at: Timestamp,
}

impl PhoneNumber {
    /// Creates a new instance of [`PhoneNumber`].
    pub fn from_model(phone: model::PhoneNumber) -> Self {
        Self {
            phone_number_id: phone.id,
            tenant_id: phone.tenant_id,
            bolna_phone_id: phone.bolna_phone_id,
            phone_number: phone.phone_number,
            status: phone.status,
            created_at: phone.created_at.into(),
            updated_at: phone.updated_at.into(),
        }
    }
}

/// Response for listing phone numbers.
pub type PhoneNumbers = Vec<PhoneNumber>;
