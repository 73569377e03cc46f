//! Tenant status enumeration for account lifecycle tracking.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the lifecycle state of a tenant account.
///
/// This enumeration corresponds to the `TENANT_STATUS` PostgreSQL enum.
/// Only active tenants may authenticate and call tenant-scoped endpoints.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[ExistingTypePath = "crate::schema::sql_types::TenantStatus"]
pub enum TenantStatus {
    /// Tenant is in good standing and fully operational
    #[db_rename = "active"]
    #[serde(rename = "active")]
    #[default]
    Active,

    /// Tenant is temporarily blocked, typically for billing reasons
    #[db_rename = "suspended"]
    #[serde(rename = "suspended")]
    Suspended,

    /// Tenant has terminated their subscription
    #[db_rename = "cancelled"]
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl TenantStatus {
    /// Returns whether the tenant may use the platform.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, TenantStatus::Active)
    }
}
