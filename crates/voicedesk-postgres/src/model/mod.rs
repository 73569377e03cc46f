//! Database models for all entities in the system.
//!
//! This module contains Diesel model definitions for all database tables,
//! including structs for querying, inserting, and updating records.

mod agent;
mod api_credential;
mod audit_log;
mod call_execution;
mod campaign;
mod phone_number;
mod super_admin;
mod tenant;
mod tenant_user;

pub use agent::{Agent, NewAgent, UpdateAgent};
pub use api_credential::{ApiCredential, BOLNA_API_KEY, NewApiCredential};
pub use audit_log::{AdminAuditLog, NewAdminAuditLog};
pub use call_execution::{CallExecution, NewCallExecution, UpdateCallExecution};
pub use campaign::{Campaign, NewCampaign, UpdateCampaign};
pub use phone_number::{NewPhoneNumber, PhoneNumber, UpdatePhoneNumber};
pub use super_admin::{NewSuperAdmin, SuperAdmin};
pub use tenant::{NewTenant, PENDING_SUBACCOUNT_KEY, Tenant, UpdateTenant};
pub use tenant_user::{NewTenantUser, TenantUser, UpdateTenantUser};
