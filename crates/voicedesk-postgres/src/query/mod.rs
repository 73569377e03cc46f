//! Database query repositories for all entities in the system.
//!
//! Each repository is a trait implemented for [`PgConnection`], providing
//! high-level database operations for one table. Queries that may return
//! large result sets take an [`OffsetPagination`] to stay bounded.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`OffsetPagination`]: crate::types::OffsetPagination

pub mod agent;
pub mod api_credential;
pub mod audit_log;
pub mod call_execution;
pub mod campaign;
pub mod phone_number;
pub mod super_admin;
pub mod tenant;
pub mod tenant_user;

pub use agent::AgentRepository;
pub use api_credential::ApiCredentialRepository;
pub use audit_log::AuditLogRepository;
pub use call_execution::CallExecutionRepository;
pub use campaign::CampaignRepository;
pub use phone_number::PhoneNumberRepository;
pub use super_admin::SuperAdminRepository;
pub use tenant::TenantRepository;
pub use tenant_user::TenantUserRepository;
