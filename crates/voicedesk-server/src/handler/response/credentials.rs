//! Platform credential response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voicedesk_postgres::model;

/// Response for a stored credential.
///
/// The secret value itself is never echoed back.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStored {
    /// Key the credential was stored under.
    pub key: String,
    /// Timestamp when the credential was last written.
    pub updated_at: Timestamp,
}

impl CredentialStored {
    /// Creates a new instance of [`CredentialStored`].
    pub fn from_model(credential: model::ApiCredential) -> Self {
        Self {
            key: credential.key,
            updated_at: credential.updated_at.into(),
        }
    }
}

/// Response for a credential presence check.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    /// Key that was checked.
    pub key: String,
    /// Whether a credential is stored under the key.
    pub exists: bool,
}

impl CredentialStatus {
    /// Creates a new instance of [`CredentialStatus`].
    pub fn new(key: String, exists: bool) -> Self {
        Self { key, exists }
    }
}
