//! Admin audit log repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{AdminAuditLog, NewAdminAuditLog};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for admin audit log database operations.
///
/// The log is append only. Rows are written inside the transaction that
/// performs the audited action, so a failed write rolls the action back.
pub trait AuditLogRepository {
    /// Appends a new audit log entry.
    fn append_audit_log(
        &mut self,
        entry: NewAdminAuditLog,
    ) -> impl Future<Output = PgResult<AdminAuditLog>> + Send;
}

impl AuditLogRepository for PgConnection {
    async fn append_audit_log(&mut self, entry: NewAdminAuditLog) -> PgResult<AdminAuditLog> {
        use schema::admin_audit_logs::dsl::*;

        let entry = diesel::insert_into(admin_audit_logs)
            .values(&entry)
            .returning(AdminAuditLog::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(entry)
    }
}
