//! Tenant user response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;
use voicedesk_postgres::types::{UserRole, UserStatus};

/// Tenant user response.
///
/// Never carries the password hash.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// ID of the user.
    pub user_id: Uuid,
    /// Tenant this user belongs to.
    pub tenant_id: Uuid,
    /// Human-readable name.
    pub display_name: String,
    /// Login email.
    pub email: String,
    /// Role within the tenant.
    pub role: UserRole,
    /// Whether the user may sign in.
    pub status: UserStatus,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
    /// Timestamp when the user was last updated.
    pub updated_at: Timestamp,
}

impl User {
    /// Creates a new instance of [`User`].
    pub fn from_model(user: model::TenantUser) -> Self {
        Self {
            user_id: user.id,
            tenant_id: user.tenant_id,
            display_name: user.display_name,
            email: user.email,
            role: user.role,
            status: user.status,
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
        }
    }
}

/// Response for listing tenant users.
pub type Users = Vec<User>;
