//! Tenant model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::tenants;
use crate::types::{PlanLimits, PlanTier, TenantStatus};

/// Settings key set when the provider sub-account could not be created
/// programmatically and a placeholder id was stored instead.
pub const PENDING_SUBACCOUNT_KEY: &str = "pending_subaccount";

/// Customer organization owning users, agents and phone numbers.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = tenants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Human-readable organization name (1-100 characters).
    pub display_name: String,
    /// URL-safe unique identifier used in tenant-scoped paths.
    pub slug: String,
    /// Sub-account id on the upstream voice provider, globally unique.
    pub bolna_subaccount_id: String,
    /// Subscription plan controlling resource limits.
    pub plan: PlanTier,
    /// Account lifecycle state.
    pub status: TenantStatus,
    /// Opaque tenant settings.
    pub settings: serde_json::Value,
    /// Timestamp when the tenant was created.
    pub created_at: Timestamp,
    /// Timestamp when the tenant was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new tenant.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = tenants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTenant {
    /// Organization name.
    pub display_name: String,
    /// URL-safe unique identifier.
    pub slug: String,
    /// Provider sub-account id.
    pub bolna_subaccount_id: String,
    /// Subscription plan.
    pub plan: Option<PlanTier>,
    /// Initial settings.
    pub settings: Option<serde_json::Value>,
}

/// Data for updating a tenant.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tenants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTenant {
    /// Organization name.
    pub display_name: Option<String>,
    /// Provider sub-account id.
    pub bolna_subaccount_id: Option<String>,
    /// Subscription plan.
    pub plan: Option<PlanTier>,
    /// Account lifecycle state.
    pub status: Option<TenantStatus>,
    /// Opaque tenant settings.
    pub settings: Option<serde_json::Value>,
}

impl Tenant {
    /// Returns whether the tenant may use the platform.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the static plan limits for this tenant's tier.
    #[inline]
    pub fn limits(&self) -> &'static PlanLimits {
        PlanLimits::for_tier(self.plan)
    }

    /// Returns whether the provider sub-account is still a local placeholder.
    pub fn has_pending_subaccount(&self) -> bool {
        self.settings
            .get(PENDING_SUBACCOUNT_KEY)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}
