//! Audit action enumeration for administrative activity tracking.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the kind of administrative action recorded in the audit log.
///
/// This enumeration corresponds to the `AUDIT_ACTION` PostgreSQL enum.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
#[ExistingTypePath = "crate::schema::sql_types::AuditAction"]
pub enum AuditAction {
    /// A super admin started impersonating a tenant user
    #[db_rename = "impersonation_start"]
    #[serde(rename = "impersonation_start")]
    ImpersonationStart,

    /// A super admin ended an impersonation session
    #[db_rename = "impersonation_stop"]
    #[serde(rename = "impersonation_stop")]
    ImpersonationStop,
}
