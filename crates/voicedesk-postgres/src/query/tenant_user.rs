//! Tenant user repository for per-tenant account management.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewTenantUser, Tenant, TenantUser, UpdateTenantUser};
use crate::types::{OffsetPagination, UserStatus};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for tenant user database operations.
pub trait TenantUserRepository {
    /// Creates a new tenant user.
    fn create_tenant_user(
        &mut self,
        user: NewTenantUser,
    ) -> impl Future<Output = PgResult<TenantUser>> + Send;

    /// Finds a user by ID.
    fn find_tenant_user_by_id(
        &mut self,
        user_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<TenantUser>>> + Send;

    /// Finds a user by email across all tenants.
    ///
    /// Email comparison is case-insensitive.
    fn find_tenant_user_by_email(
        &mut self,
        email: &str,
    ) -> impl Future<Output = PgResult<Option<TenantUser>>> + Send;

    /// Finds a user together with their tenant.
    ///
    /// Used by the authorization guard, which must check both the user and
    /// the tenant status in a single round trip.
    fn find_user_with_tenant(
        &mut self,
        user_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<(TenantUser, Tenant)>>> + Send;

    /// Updates a user with partial changes.
    fn update_tenant_user(
        &mut self,
        user_id: Uuid,
        changes: UpdateTenantUser,
    ) -> impl Future<Output = PgResult<TenantUser>> + Send;

    /// Lists users of one tenant ordered by creation time.
    fn list_tenant_users(
        &mut self,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<TenantUser>>> + Send;

    /// Counts users of one tenant, all statuses included.
    fn count_tenant_users(&mut self, tenant_id: Uuid) -> impl Future<Output = PgResult<i64>> + Send;

    /// Deletes inactive users and users whose email contains `test`.
    ///
    /// Maintenance heuristic invoked by the sync service when purging is
    /// enabled. Returns the number of deleted rows.
    fn purge_stale_users(&mut self, tenant_id: Uuid) -> impl Future<Output = PgResult<u64>> + Send;
}

impl TenantUserRepository for PgConnection {
    async fn create_tenant_user(&mut self, mut user: NewTenantUser) -> PgResult<TenantUser> {
        use schema::tenant_users;

        user.email = user.email.trim().to_lowercase();

        let user = diesel::insert_into(tenant_users::table)
            .values(&user)
            .returning(TenantUser::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn find_tenant_user_by_id(&mut self, user_id: Uuid) -> PgResult<Option<TenantUser>> {
        use schema::tenant_users::dsl::*;

        tenant_users
            .filter(id.eq(user_id))
            .select(TenantUser::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_tenant_user_by_email(&mut self, user_email: &str) -> PgResult<Option<TenantUser>> {
        use schema::tenant_users::dsl::*;

        tenant_users
            .filter(email.eq(user_email.trim().to_lowercase()))
            .select(TenantUser::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_user_with_tenant(
        &mut self,
        user_id: Uuid,
    ) -> PgResult<Option<(TenantUser, Tenant)>> {
        use schema::{tenant_users, tenants};

        tenant_users::table
            .inner_join(tenants::table)
            .filter(tenant_users::id.eq(user_id))
            .select((TenantUser::as_select(), Tenant::as_select()))
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_tenant_user(
        &mut self,
        user_id: Uuid,
        mut changes: UpdateTenantUser,
    ) -> PgResult<TenantUser> {
        use schema::tenant_users::dsl::*;

        if let Some(new_email) = changes.email.take() {
            changes.email = Some(new_email.trim().to_lowercase());
        }

        let user = diesel::update(tenant_users)
            .filter(id.eq(user_id))
            .set(&changes)
            .returning(TenantUser::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn list_tenant_users(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<TenantUser>> {
        use schema::tenant_users::dsl::*;

        tenant_users
            .filter(tenant_id.eq(owner_id))
            .select(TenantUser::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_tenant_users(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::tenant_users::dsl::*;

        tenant_users
            .filter(tenant_id.eq(owner_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn purge_stale_users(&mut self, owner_id: Uuid) -> PgResult<u64> {
        use schema::tenant_users::dsl::*;

        let deleted = diesel::delete(tenant_users)
            .filter(tenant_id.eq(owner_id))
            .filter(
                status
                    .eq(UserStatus::Inactive)
                    .or(email.like("%test%")),
            )
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted as u64)
    }
}
