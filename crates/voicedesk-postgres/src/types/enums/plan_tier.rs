//! Subscription plan tier enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the subscription plan of a tenant.
///
/// This enumeration corresponds to the `PLAN_TIER` PostgreSQL enum. Each tier
/// maps to a set of resource limits, see [`PlanLimits`].
///
/// [`PlanLimits`]: crate::types::PlanLimits
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[ExistingTypePath = "crate::schema::sql_types::PlanTier"]
pub enum PlanTier {
    /// Entry-level plan with the tightest resource limits
    #[db_rename = "starter"]
    #[serde(rename = "starter")]
    #[default]
    Starter,

    /// Mid-tier plan for growing teams
    #[db_rename = "pro"]
    #[serde(rename = "pro")]
    Pro,

    /// Top tier with unlimited resources and all features
    #[db_rename = "enterprise"]
    #[serde(rename = "enterprise")]
    Enterprise,
}

impl PlanTier {
    /// Parses a plan name, falling back to [`PlanTier::Starter`] when the
    /// name is not recognized.
    ///
    /// Unknown plan names are treated as the most restrictive tier rather
    /// than rejected, so a tenant row with a stale plan label keeps working.
    #[inline]
    pub fn from_plan_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns whether this tier unlocks every feature.
    #[inline]
    pub fn is_enterprise(self) -> bool {
        matches!(self, PlanTier::Enterprise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_plan_names() {
        assert_eq!(PlanTier::from_plan_name("starter"), PlanTier::Starter);
        assert_eq!(PlanTier::from_plan_name("pro"), PlanTier::Pro);
        assert_eq!(PlanTier::from_plan_name("enterprise"), PlanTier::Enterprise);
    }

    #[test]
    fn unknown_plan_names_fall_back_to_starter() {
        assert_eq!(PlanTier::from_plan_name("platinum"), PlanTier::Starter);
        assert_eq!(PlanTier::from_plan_name(""), PlanTier::Starter);
    }
}
