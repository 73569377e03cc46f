//! Super admins table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Super admin table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum SuperAdminConstraints {
    // Validation constraints
    #[strum(serialize = "super_admins_email_length")]
    EmailLength,
    #[strum(serialize = "super_admins_display_name_length")]
    DisplayNameLength,

    // Unique constraints
    #[strum(serialize = "super_admins_email_unique_idx")]
    EmailUnique,
}

impl SuperAdminConstraints {
    /// Creates a new [`SuperAdminConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            SuperAdminConstraints::EmailLength | SuperAdminConstraints::DisplayNameLength => {
                ConstraintCategory::Validation
            }
            SuperAdminConstraints::EmailUnique => ConstraintCategory::Uniqueness,
        }
    }
}

impl From<SuperAdminConstraints> for String {
    #[inline]
    fn from(val: SuperAdminConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for SuperAdminConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
