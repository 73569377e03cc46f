//! Tenant response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;
use voicedesk_postgres::types::{PlanTier, TenantStatus};

use super::users::User;

/// Tenant response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// ID of the tenant.
    pub tenant_id: Uuid,
    /// Display name of the organization.
    pub display_name: String,
    /// URL-safe unique identifier.
    pub slug: String,
    /// Sub-account id on the upstream voice provider.
    pub bolna_subaccount_id: String,
    /// Subscription plan.
    pub plan: PlanTier,
    /// Account lifecycle state.
    pub status: TenantStatus,
    /// Free-form settings document.
    pub settings: serde_json::Value,
    /// Whether the provider sub-account is still a local placeholder.
    pub pending_subaccount: bool,
    /// Timestamp when the tenant was created.
    pub created_at: Timestamp,
    /// Timestamp when the tenant was last updated.
    pub updated_at: Timestamp,
}

impl Tenant {
    /// Creates a new instance of [`Tenant`].
    pub fn from_model(tenant: model::Tenant) -> Self {
        let pending_subaccount = tenant.has_pending_subaccount();
        Self {
            tenant_id: tenant.id,
            display_name: tenant.display_name,
            slug: tenant.slug,
            bolna_subaccount_id: tenant.bolna_subaccount_id,
            plan: tenant.plan,
            status: tenant.status,
            settings: tenant.settings,
            pending_subaccount,
            created_at: tenant.created_at.into(),
            updated_at: tenant.updated_at.into(),
        }
    }
}

/// Response for listing tenants.
pub type Tenants = Vec<Tenant>;

/// Response for a freshly provisioned tenant.
///
/// Carries the first admin user created alongside the organization.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantProvisioned {
    /// The created tenant.
    pub tenant: Tenant,
    /// The tenant's first admin user.
    pub admin_user: User,
}

impl TenantProvisioned {
    /// Creates a new instance of [`TenantProvisioned`].
    pub fn from_models(tenant: model::Tenant, admin_user: model::TenantUser) -> Self {
        Self {
            tenant: Tenant::from_model(tenant),
            admin_user: User::from_model(admin_user),
        }
    }
}
