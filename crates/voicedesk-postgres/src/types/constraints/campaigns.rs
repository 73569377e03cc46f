//! Campaigns table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Campaign table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum CampaignConstraints {
    // Validation constraints
    #[strum(serialize = "campaigns_display_name_length")]
    DisplayNameLength,
}

impl CampaignConstraints {
    /// Creates a new [`CampaignConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            CampaignConstraints::DisplayNameLength => ConstraintCategory::Validation,
        }
    }
}

impl From<CampaignConstraints> for String {
    #[inline]
    fn from(val: CampaignConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for CampaignConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
