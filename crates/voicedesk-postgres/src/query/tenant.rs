//! Tenant repository for managing customer organizations.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewTenant, Tenant, UpdateTenant};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for tenant database operations.
pub trait TenantRepository {
    /// Creates a new tenant.
    fn create_tenant(&mut self, tenant: NewTenant)
    -> impl Future<Output = PgResult<Tenant>> + Send;

    /// Finds a tenant by ID.
    fn find_tenant_by_id(
        &mut self,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Tenant>>> + Send;

    /// Finds a tenant by its URL slug.
    fn find_tenant_by_slug(
        &mut self,
        slug: &str,
    ) -> impl Future<Output = PgResult<Option<Tenant>>> + Send;

    /// Finds a tenant by its provider sub-account id.
    fn find_tenant_by_subaccount(
        &mut self,
        subaccount_id: &str,
    ) -> impl Future<Output = PgResult<Option<Tenant>>> + Send;

    /// Updates a tenant with partial changes.
    fn update_tenant(
        &mut self,
        tenant_id: Uuid,
        changes: UpdateTenant,
    ) -> impl Future<Output = PgResult<Tenant>> + Send;

    /// Lists tenants ordered by creation time, most recent first.
    fn list_tenants(
        &mut self,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Tenant>>> + Send;
}

impl TenantRepository for PgConnection {
    async fn create_tenant(&mut self, tenant: NewTenant) -> PgResult<Tenant> {
        use schema::tenants;

        let tenant = diesel::insert_into(tenants::table)
            .values(&tenant)
            .returning(Tenant::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(tenant)
    }

    async fn find_tenant_by_id(&mut self, tenant_id: Uuid) -> PgResult<Option<Tenant>> {
        use schema::tenants::dsl::*;

        tenants
            .filter(id.eq(tenant_id))
            .select(Tenant::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_tenant_by_slug(&mut self, tenant_slug: &str) -> PgResult<Option<Tenant>> {
        use schema::tenants::dsl::*;

        tenants
            .filter(slug.eq(tenant_slug))
            .select(Tenant::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_tenant_by_subaccount(&mut self, subaccount_id: &str) -> PgResult<Option<Tenant>> {
        use schema::tenants::dsl::*;

        tenants
            .filter(bolna_subaccount_id.eq(subaccount_id))
            .select(Tenant::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_tenant(&mut self, tenant_id: Uuid, changes: UpdateTenant) -> PgResult<Tenant> {
        use schema::tenants::dsl::*;

        let tenant = diesel::update(tenants)
            .filter(id.eq(tenant_id))
            .set(&changes)
            .returning(Tenant::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(tenant)
    }

    async fn list_tenants(&mut self, pagination: OffsetPagination) -> PgResult<Vec<Tenant>> {
        use schema::tenants::dsl::*;

        tenants
            .select(Tenant::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
