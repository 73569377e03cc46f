//! `PostgreSQL` enumeration types mapped with [`diesel_derive_enum`].

pub mod audit_action;
pub mod campaign_status;
pub mod plan_tier;
pub mod tenant_status;
pub mod user_role;
pub mod user_status;

pub use audit_action::AuditAction;
pub use campaign_status::CampaignStatus;
pub use plan_tier::PlanTier;
pub use tenant_status::TenantStatus;
pub use user_role::UserRole;
pub use user_status::UserStatus;
