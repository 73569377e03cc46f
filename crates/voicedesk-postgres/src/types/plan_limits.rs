//! Static plan limit catalog and quota decisions.
//!
//! Quota enforcement is advisory counting: callers read the current count
//! and compare it against the limit before creating a resource. Two
//! concurrent creates can both pass the check, the limit is a soft
//! business cap rather than a hard integrity constraint.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::PlanTier;

/// Sentinel limit value meaning "no cap".
pub const UNLIMITED: i64 = -1;

/// Sentinel feature name that unlocks every feature.
pub const ALL_FEATURES: &str = "all_features";

/// Countable resource types subject to plan limits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuotaResource {
    Users,
    Agents,
    PhoneNumbers,
    CallsPerMonth,
    Campaigns,
}

impl QuotaResource {
    /// Human-readable noun used in denial messages.
    pub fn noun(self) -> &'static str {
        match self {
            QuotaResource::Users => "users",
            QuotaResource::Agents => "agents",
            QuotaResource::PhoneNumbers => "phone numbers",
            QuotaResource::CallsPerMonth => "calls this month",
            QuotaResource::Campaigns => "campaigns",
        }
    }
}

/// Outcome of a quota check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "quota decisions do nothing unless you act on them"]
pub enum QuotaDecision {
    /// The resource may be created.
    Allowed {
        /// Limit that applied to the check, [`UNLIMITED`] for no cap.
        limit: i64,
    },
    /// The resource must not be created.
    Denied {
        /// Limit that was reached.
        limit: i64,
        /// Denial reason, surfaced verbatim to the caller.
        message: String,
    },
}

impl QuotaDecision {
    /// Returns `true` if the creation may proceed.
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, QuotaDecision::Allowed { .. })
    }

    /// Returns the denial message, or `None` when allowed.
    pub fn denial_message(&self) -> Option<&str> {
        match self {
            QuotaDecision::Allowed { .. } => None,
            QuotaDecision::Denied { message, .. } => Some(message),
        }
    }
}

/// Resource limits and feature flags for a single plan tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanLimits {
    /// Tier this row belongs to.
    pub tier: PlanTier,
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
    pub features: &'static [&'static str],
}

static STARTER: PlanLimits = PlanLimits {
    tier: PlanTier::Starter,
    max_users: 5,
    max_agents: 2,
    max_phone_numbers: 1,
    max_calls_per_month: 500,
    max_campaigns: 2,
    features: &["voice_calls", "basic_analytics"],
};

static PRO: PlanLimits = PlanLimits {
    tier: PlanTier::Pro,
    max_users: 25,
    max_agents: 10,
    max_phone_numbers: 5,
    max_calls_per_month: 5000,
    max_campaigns: 10,
    features: &[
        "voice_calls",
        "basic_analytics",
        "campaigns",
        "knowledgebases",
        "batch_calling",
    ],
};

static ENTERPRISE: PlanLimits = PlanLimits {
    tier: PlanTier::Enterprise,
    max_users: UNLIMITED,
    max_agents: UNLIMITED,
    max_phone_numbers: UNLIMITED,
    max_calls_per_month: UNLIMITED,
    max_campaigns: UNLIMITED,
    features: &[ALL_FEATURES],
};

impl PlanLimits {
    /// Returns the static limits row for the given tier.
    pub fn for_tier(tier: PlanTier) -> &'static PlanLimits {
        match tier {
            PlanTier::Starter => &STARTER,
            PlanTier::Pro => &PRO,
            PlanTier::Enterprise => &ENTERPRISE,
        }
    }

    /// Returns the limits row for a plan name, falling back to the
    /// lowest tier for unknown names.
    #[inline]
    pub fn for_plan_name(name: &str) -> &'static PlanLimits {
        Self::for_tier(PlanTier::from_plan_name(name))
    }

    /// Returns the numeric limit for the given resource type.
    pub fn limit_for(&self, resource: QuotaResource) -> i64 {
        match resource {
            QuotaResource::Users => self.max_users,
            QuotaResource::Agents => self.max_agents,
            QuotaResource::PhoneNumbers => self.max_phone_numbers,
            QuotaResource::CallsPerMonth => self.max_calls_per_month,
            QuotaResource::Campaigns => self.max_campaigns,
        }
    }

    /// Decides whether one more resource of the given type may be created.
    ///
    /// `current_count` must be read at decision time, stale counts widen
    /// the race window between concurrent creates.
    pub fn check_quota(&self, resource: QuotaResource, current_count: i64) -> QuotaDecision {
        let limit = self.limit_for(resource);
        if limit == UNLIMITED || current_count < limit {
            return QuotaDecision::Allowed { limit };
        }

        QuotaDecision::Denied {
            limit,
            message: format!(
                "Plan limit reached: the {} plan allows at most {} {}",
                self.tier,
                limit,
                resource.noun(),
            ),
        }
    }

    /// Returns whether this tier unlocks the named feature.
    ///
    /// The [`ALL_FEATURES`] sentinel in a feature set matches any name.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features
            .iter()
            .any(|f| *f == feature || *f == ALL_FEATURES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_below_limit_and_denies_at_limit() {
        let limits = PlanLimits::for_tier(PlanTier::Starter);

        assert!(limits.check_quota(QuotaResource::Agents, 0).is_allowed());
        assert!(limits.check_quota(QuotaResource::Agents, 1).is_allowed());

        let decision = limits.check_quota(QuotaResource::Agents, 2);
        assert!(!decision.is_allowed());
    }

    #[test]
    fn unlimited_never_denies() {
        let limits = PlanLimits::for_tier(PlanTier::Enterprise);

        assert!(
            limits
                .check_quota(QuotaResource::CallsPerMonth, i64::MAX - 1)
                .is_allowed()
        );
    }

    #[test]
    fn denial_message_names_plan_limit_and_resource() {
        let limits = PlanLimits::for_tier(PlanTier::Pro);
        let decision = limits.check_quota(QuotaResource::PhoneNumbers, 5);

        let message = decision.denial_message().unwrap();
        assert!(message.to_lowercase().contains("plan limit reached"));
        assert!(message.contains("pro"));
        assert!(message.contains('5'));
        assert!(message.contains("phone numbers"));
    }

    #[test]
    fn unknown_plan_names_use_starter_limits() {
        let limits = PlanLimits::for_plan_name("platinum");
        assert_eq!(limits.tier, PlanTier::Starter);
        assert_eq!(limits.max_agents, STARTER.max_agents);
    }

    #[test]
    fn feature_lookup_honors_sentinel() {
        let starter = PlanLimits::for_tier(PlanTier::Starter);
        assert!(starter.has_feature("voice_calls"));
        assert!(!starter.has_feature("campaigns"));

        let enterprise = PlanLimits::for_tier(PlanTier::Enterprise);
        assert!(enterprise.has_feature("campaigns"));
        assert!(enterprise.has_feature("anything_at_all"));
    }
}
