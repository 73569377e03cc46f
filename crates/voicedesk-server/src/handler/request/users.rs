//! Tenant user request types.
//!
//! Two creation payloads exist: [`CreateUser`] for the super-admin surface,
//! which names the target tenant explicitly, and [`CreateTenantUser`] for
//! tenant admins, where the tenant comes from the session.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use voicedesk_postgres::model::{NewTenantUser, UpdateTenantUser as UpdateTenantUserModel};
use voicedesk_postgres::types::{UserRole, UserStatus};

/// Request payload for creating a tenant user from the super-admin surface.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Tenant the new user belongs to.
    pub tenant_id: Uuid,
    /// Display name of the user (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// Login email, unique across all tenants.
    #[validate(email)]
    pub email: String,
    /// Initial password (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Role within the tenant; defaults to the lowest role.
    pub role: Option<UserRole>,
}

impl CreateUser {
    /// Converts this request into a [`NewTenantUser`] for database insertion.
    pub fn into_model(self, password_hash: String) -> NewTenantUser {
        NewTenantUser {
            tenant_id: self.tenant_id,
            display_name: self.display_name,
            email: self.email,
            password_hash,
            role: self.role,
            status: Some(UserStatus::Active),
        }
    }
}

/// Request payload for creating a user inside the caller's own tenant.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantUser {
    /// Display name of the user (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// Login email, unique across all tenants.
    #[validate(email)]
    pub email: String,
    /// Initial password (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Role within the tenant; defaults to the lowest role.
    pub role: Option<UserRole>,
}

impl CreateTenantUser {
    /// Converts this request into a [`NewTenantUser`] scoped to the session
    /// tenant.
    pub fn into_model(self, tenant_id: Uuid, password_hash: String) -> NewTenantUser {
        NewTenantUser {
            tenant_id,
            display_name: self.display_name,
            email: self.email,
            password_hash,
            role: self.role,
            status: Some(UserStatus::Active),
        }
    }
}

/// Request payload to update an existing tenant user.
///
/// All fields are optional; only provided fields will be updated. Setting
/// the status to `inactive` is the soft-removal path, there is no delete.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    /// New display name (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,
    /// New login email.
    #[validate(email)]
    pub email: Option<String>,
    /// New password (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    /// New role within the tenant.
    pub role: Option<UserRole>,
    /// New sign-in status.
    pub status: Option<UserStatus>,
}

impl UpdateUser {
    /// Converts this request into an [`UpdateTenantUserModel`] changeset.
    ///
    /// The password is carried separately because it must be hashed before
    /// it reaches the database layer.
    pub fn into_model(self, password_hash: Option<String>) -> UpdateTenantUserModel {
        UpdateTenantUserModel {
            display_name: self.display_name,
            email: self.email,
            password_hash,
            role: self.role,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_default_to_active() {
        let request = CreateTenantUser {
            display_name: "Morgan Operator".to_owned(),
            email: "morgan@acme.example.com".to_owned(),
            password: "long-enough-password".to_owned(),
            role: Some(UserRole::Manager),
        };

        let tenant_id = Uuid::new_v4();
        let model = request.into_model(tenant_id, "$argon2id$fake".to_owned());

        assert_eq!(model.tenant_id, tenant_id);
        assert_eq!(model.role, Some(UserRole::Manager));
        assert_eq!(model.status, Some(UserStatus::Active));
    }

    #[test]
    fn update_keeps_password_out_of_the_changeset_when_absent() {
        let request = UpdateUser {
            display_name: Some("Renamed".to_owned()),
            ..Default::default()
        };

        let model = request.into_model(None);
        assert_eq!(model.display_name.as_deref(), Some("Renamed"));
        assert!(model.password_hash.is_none());
    }
}
