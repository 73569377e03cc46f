//! Super admin repository for platform operator accounts.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewSuperAdmin, SuperAdmin};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for super admin database operations.
pub trait SuperAdminRepository {
    /// Creates a new super admin.
    fn create_super_admin(
        &mut self,
        admin: NewSuperAdmin,
    ) -> impl Future<Output = PgResult<SuperAdmin>> + Send;

    /// Finds a super admin by ID.
    fn find_super_admin_by_id(
        &mut self,
        admin_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<SuperAdmin>>> + Send;

    /// Finds a super admin by email.
    ///
    /// Email comparison is case-insensitive.
    fn find_super_admin_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<SuperAdmin>>> + Send;
}

impl SuperAdminRepository for PgConnection {
    async fn create_super_admin(&mut self, mut admin: NewSuperAdmin) -> PgResult<SuperAdmin> {
        use schema::super_admins;

        admin.email = admin.email.trim().to_lowercase();

        let admin = diesel::insert_into(super_admins::table)
            .values(&admin)
            .returning(SuperAdmin::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(admin)
    }

    async fn find_super_admin_by_id(&mut self, admin_id: Uuid) -> PgResult<Option<SuperAdmin>> {
        use schema::super_admins::dsl::*;

        super_admins
            .filter(id.eq(admin_id))
            .select(SuperAdmin::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_super_admin_by_email(
        &mut self,
        admin_email: &str,
    ) -> PgResult<Option<SuperAdmin>> {
        use schema::super_admins::dsl::*;

        super_admins
            .filter(email.eq(admin_email.trim().to_lowercase()))
            .select(SuperAdmin::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }
}
