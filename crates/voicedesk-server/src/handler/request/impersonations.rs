//! Impersonation request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request payload for starting an impersonation session.
///
/// Without an explicit target the server impersonates the tenant's first
/// active admin user.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartImpersonation {
    /// Specific tenant user to impersonate.
    pub user_id: Option<Uuid>,
}
