//! Session response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;

use super::tenants::Tenant;
use super::users::User;

/// Super admin account response.
///
/// Never carries the password hash.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    /// ID of the admin.
    pub admin_id: Uuid,
    /// Login email.
    pub email: String,
    /// Human-readable name.
    pub display_name: String,
    /// Timestamp when the admin was created.
    pub created_at: Timestamp,
}

impl AdminAccount {
    /// Creates a new instance of [`AdminAccount`].
    pub fn from_model(admin: model::SuperAdmin) -> Self {
        Self {
            admin_id: admin.id,
            email: admin.email,
            display_name: admin.display_name,
            created_at: admin.created_at.into(),
        }
    }
}

/// Response for a successful super admin login.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    /// Signed bearer token for subsequent requests.
    pub token: String,
    /// The authenticated admin.
    pub admin: AdminAccount,
}

impl AdminSession {
    /// Creates a new instance of [`AdminSession`].
    pub fn new(token: String, admin: model::SuperAdmin) -> Self {
        Self {
            token,
            admin: AdminAccount::from_model(admin),
        }
    }
}

/// Response for a successful tenant user login.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantSession {
    /// Signed bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
    /// The tenant the user belongs to.
    pub tenant: Tenant,
}

impl TenantSession {
    /// Creates a new instance of [`TenantSession`].
    pub fn new(token: String, user: model::TenantUser, tenant: model::Tenant) -> Self {
        Self {
            token,
            user: User::from_model(user),
            tenant: Tenant::from_model(tenant),
        }
    }
}

/// Response for a started impersonation session.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpersonationSession {
    /// Short-lived bearer token acting as the target user.
    pub token: String,
    /// Timestamp when the token expires.
    pub expires_at: Timestamp,
    /// The impersonated user.
    pub user: User,
    /// The tenant the user belongs to.
    pub tenant: Tenant,
}

impl ImpersonationSession {
    /// Creates a new instance of [`ImpersonationSession`].
    pub fn new(
        token: String,
        expires_at: Timestamp,
        user: model::TenantUser,
        tenant: model::Tenant,
    ) -> Self {
        Self {
            token,
            expires_at,
            user: User::from_model(user),
            tenant: Tenant::from_model(tenant),
        }
    }
}

/// Acknowledgement that an impersonation session was closed.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpersonationStopped {
    /// The user the closed session was acting as.
    pub user_id: Uuid,
    /// The tenant the closed session was scoped to.
    pub tenant_id: Uuid,
}

impl ImpersonationStopped {
    /// Creates a new instance of [`ImpersonationStopped`].
    pub fn new(user_id: Uuid, tenant_id: Uuid) -> Self {
        Self { user_id, tenant_id }
    }
}
