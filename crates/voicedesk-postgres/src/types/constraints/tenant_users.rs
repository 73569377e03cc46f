//! Tenant users table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Tenant user table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum TenantUserConstraints {
    // Validation constraints
    #[strum(serialize = "tenant_users_email_length")]
    EmailLength,
    #[strum(serialize = "tenant_users_display_name_length")]
    DisplayNameLength,

    // Unique constraints
    #[strum(serialize = "tenant_users_email_unique_idx")]
    EmailUnique,
}

impl TenantUserConstraints {
    /// Creates a new [`TenantUserConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            TenantUserConstraints::EmailLength | TenantUserConstraints::DisplayNameLength => {
                ConstraintCategory::Validation
            }
            TenantUserConstraints::EmailUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<TenantUserConstraints> for String {
    #[inline]
    fn from(val: TenantUserConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for TenantUserConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
