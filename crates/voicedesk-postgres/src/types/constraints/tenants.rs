//! Tenants table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Tenant table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum TenantConstraints {
    // Validation constraints
    #[strum(serialize = "tenants_display_name_length")]
    DisplayNameLength,
    #[strum(serialize = "tenants_slug_format")]
    SlugFormat,

    // Unique constraints
    #[strum(serialize = "tenants_slug_unique_idx")]
    SlugUnique,
    #[strum(serialize = "tenants_subaccount_unique_idx")]
    SubaccountUnique,
}

impl TenantConstraints {
    /// Creates a new [`TenantConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            TenantConstraints::DisplayNameLength | TenantConstraints::SlugFormat => {
                ConstraintCategory::Validation
            }
            TenantConstraints::SlugUnique | TenantConstraints::SubaccountUnique => {
                ConstraintCategory::Uniqueness
            }
        }
    }
}

impl From<TenantConstraints> for String {
    #[inline]
    fn from(val: TenantConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for TenantConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
