//! Plan limit and usage response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voicedesk_postgres::types::{PlanLimits, PlanTier};

/// Numeric caps and feature flags of a plan tier.
///
/// A limit of `-1` means the tier has no cap for that resource.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanAllowance {
    /// Maximum number of tenant users.
    pub max_users: i64,
    /// Maximum number of voice agents.
    pub max_agents: i64,
    /// Maximum number of phone numbers.
    pub max_phone_numbers: i64,
    /// Maximum number of calls per calendar month.
    pub max_calls_per_month: i64,
    /// Maximum number of campaigns.
    pub max_campaigns: i64,
    /// Feature names unlocked by this tier.
    pub features: Vec<String>,
}

impl PlanAllowance {
    /// Creates a new instance of [`PlanAllowance`].
    pub fn from_limits(limits: &PlanLimits) -> Self {
        Self {
            max_users: limits.max_users,
            max_agents: limits.max_agents,
            max_phone_numbers: limits.max_phone_numbers,
            max_calls_per_month: limits.max_calls_per_month,
            max_campaigns: limits.max_campaigns,
            features: limits.features.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Live resource counts for a tenant.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanUsage {
    /// Current number of tenant users.
    pub users: i64,
    /// Current number of voice agents.
    pub agents: i64,
    /// Current number of phone numbers.
    pub phone_numbers: i64,
    /// Calls started in the current calendar month.
    pub calls_this_month: i64,
    /// Current number of campaigns.
    pub campaigns: i64,
}

/// Response exposing a tenant's plan caps next to its live usage.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantLimits {
    /// Subscription plan tier.
    pub plan: PlanTier,
    /// Caps and features of the tier.
    pub limits: PlanAllowance,
    /// Live counts measured at request time.
    pub usage: PlanUsage,
}

impl TenantLimits {
    /// Creates a new instance of [`TenantLimits`].
    pub fn new(limits: &PlanLimits, usage: PlanUsage) -> Self {
        Self {
            plan: limits.tier,
            limits: PlanAllowance::from_limits(limits),
            usage,
        }
    }
}
