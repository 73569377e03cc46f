//! Tenant administration request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};
use voicedesk_postgres::model::{
    NewTenant, NewTenantUser, UpdateTenant as UpdateTenantModel,
};
use voicedesk_postgres::types::{PlanTier, TenantStatus, UserRole, UserStatus};

/// Request payload for provisioning a new tenant.
///
/// Tenant creation always pairs the organization with its first admin user,
/// so both sets of fields are required. The provider sub-account id is
/// optional; when absent the server asks the provider for one.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    /// Display name of the organization (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// URL-safe unique identifier (2-50 characters, `a-z`, `0-9`, `-`).
    #[validate(length(min = 2, max = 50), custom(function = "validate_slug"))]
    pub slug: String,
    /// Subscription plan; defaults to the starter tier.
    pub plan: Option<PlanTier>,
    /// Existing provider sub-account to attach instead of creating one.
    #[validate(length(min = 1, max = 100))]
    pub bolna_subaccount_id: Option<String>,
    /// Display name of the first admin user (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub admin_name: String,
    /// Login email of the first admin user.
    #[validate(email)]
    pub admin_email: String,
    /// Password of the first admin user (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub admin_password: String,
}

impl CreateTenant {
    /// Builds the tenant row from the resolved sub-account id.
    pub fn tenant_model(
        &self,
        bolna_subaccount_id: String,
        settings: Option<serde_json::Value>,
    ) -> NewTenant {
        NewTenant {
            display_name: self.display_name.clone(),
            slug: self.slug.clone(),
            bolna_subaccount_id,
            plan: self.plan,
            settings,
        }
    }

    /// Builds the first admin user for a freshly created tenant.
    pub fn admin_model(&self, tenant_id: Uuid, password_hash: String) -> NewTenantUser {
        NewTenantUser {
            tenant_id,
            display_name: self.admin_name.clone(),
            email: self.admin_email.clone(),
            password_hash,
            role: Some(UserRole::Admin),
            status: Some(UserStatus::Active),
        }
    }
}

/// Request payload to update an existing tenant.
///
/// All fields are optional; only provided fields will be updated. The slug
/// and sub-account id are immutable after creation.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenant {
    /// New display name for the organization (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,
    /// New subscription plan.
    pub plan: Option<PlanTier>,
    /// New lifecycle state; suspending blocks all tenant logins.
    pub status: Option<TenantStatus>,
    /// Replacement settings document.
    pub settings: Option<serde_json::Value>,
}

impl UpdateTenant {
    pub fn into_model(self) -> UpdateTenantModel {
        UpdateTenantModel {
            display_name: self.display_name,
            plan: self.plan,
            status: self.status,
            settings: self.settings,
        }
    }
}

/// Checks that a slug only uses lowercase letters, digits and hyphens.
fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !valid || slug.starts_with('-') || slug.ends_with('-') {
        return Err(ValidationError::new("slug_format"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTenant {
        CreateTenant {
            display_name: "Acme Support".to_owned(),
            slug: "acme-support".to_owned(),
            plan: Some(PlanTier::Pro),
            bolna_subaccount_id: None,
            admin_name: "Ada Admin".to_owned(),
            admin_email: "ada@acme.example.com".to_owned(),
            admin_password: "correct-horse-battery".to_owned(),
        }
    }

    #[test]
    fn accepts_well_formed_tenants() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_uppercase_slugs() {
        let mut request = valid_request();
        request.slug = "Acme-Support".to_owned();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_leading_hyphen_slugs() {
        let mut request = valid_request();
        request.slug = "-acme".to_owned();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_short_admin_passwords() {
        let mut request = valid_request();
        request.admin_password = "short".to_owned();
        assert!(request.validate().is_err());
    }

    #[test]
    fn admin_model_gets_admin_role() {
        let tenant_id = Uuid::new_v4();
        let user = valid_request().admin_model(tenant_id, "$argon2id$fake".to_owned());

        assert_eq!(user.tenant_id, tenant_id);
        assert_eq!(user.role, Some(UserRole::Admin));
        assert_eq!(user.status, Some(UserStatus::Active));
    }
}
