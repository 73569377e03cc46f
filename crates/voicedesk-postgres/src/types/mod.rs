//! Contains constraints, enumerations and other custom types.

mod constraints;
mod enums;
mod pagination;
mod plan_limits;

pub use constraints::{
    AgentConstraints, CallExecutionConstraints, CampaignConstraints, ConstraintCategory,
    ConstraintViolation, SuperAdminConstraints, TenantConstraints, TenantUserConstraints,
};
pub use enums::{AuditAction, CampaignStatus, PlanTier, TenantStatus, UserRole, UserStatus};
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, OffsetPagination};
pub use plan_limits::{ALL_FEATURES, PlanLimits, QuotaDecision, QuotaResource, UNLIMITED};
