//! Admin audit log model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::admin_audit_logs;
use crate::types::AuditAction;

/// Append-only record of a privileged administrative action.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = admin_audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AdminAuditLog {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// Kind of action that was performed.
    pub action: AuditAction,
    /// Super admin who performed the action.
    pub admin_id: Uuid,
    /// Tenant user being impersonated, when applicable.
    pub impersonator_id: Option<Uuid>,
    /// Tenant affected by the action, when applicable.
    pub tenant_id: Option<Uuid>,
    /// Structured action details.
    pub details: serde_json::Value,
    /// Timestamp when the entry was written.
    pub created_at: Timestamp,
}

/// Data for appending a new audit log entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admin_audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAdminAuditLog {
    /// Kind of action that was performed.
    pub action: AuditAction,
    /// Super admin who performed the action.
    pub admin_id: Uuid,
    /// Tenant user being impersonated.
    pub impersonator_id: Option<Uuid>,
    /// Tenant affected by the action.
    pub tenant_id: Option<Uuid>,
    /// Structured action details.
    pub details: Option<serde_json::Value>,
}
