//! Tenant provisioning and administration handlers.
//!
//! All routes here sit behind the super admin guard. Tenant creation is
//! transactional: the organization and its first admin user commit together
//! or not at all.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use voicedesk_postgres::PgError;
use voicedesk_postgres::model::{self, PENDING_SUBACCOUNT_KEY};
use voicedesk_postgres::query::{TenantRepository, TenantUserRepository};

use crate::extract::{AdminState, Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{CreateTenant, PaginationQuery, TenantPathParams, UpdateTenant};
use crate::handler::response::{ErrorResponse, Tenant, TenantProvisioned, Tenants, Users};
use crate::handler::{ErrorKind, Result};
use crate::service::{AuthHasher, ProviderGateway, ServiceState};

/// Tracing target for tenant administration.
const TRACING_TARGET: &str = "voicedesk_server::handler::tenants";

/// Obtains a provider sub-account id for a new tenant.
///
/// Asks the provider to create one; any failure falls back to a local
/// placeholder id plus the pending-sub-account marker, so tenant creation
/// never depends on provider availability.
async fn provision_subaccount(
    provider: &ProviderGateway,
    display_name: &str,
    slug: &str,
) -> (String, Option<serde_json::Value>) {
    let created = match provider.client().await {
        Ok(client) => client.create_subaccount(display_name).await.map_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %err,
                "Provider rejected sub-account creation, storing placeholder",
            );
        }),
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Provider unavailable for sub-account creation, storing placeholder",
            );
            Err(())
        }
    };

    match created {
        Ok(subaccount) => (subaccount.subaccount_id, None),
        Err(()) => {
            let placeholder = format!("internal-{slug}-{}", Timestamp::now().as_millisecond());
            let settings = serde_json::json!({ PENDING_SUBACCOUNT_KEY: true });
            (placeholder, Some(settings))
        }
    }
}

/// Provisions a new tenant together with its first admin user.
///
/// A caller-supplied sub-account id is used as-is; otherwise one is created
/// on the provider, falling back to a placeholder when that fails.
#[tracing::instrument(skip_all, fields(admin_id = %admin_session.admin().id))]
async fn create_tenant(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    State(auth_hasher): State<AuthHasher>,
    ValidateJson(request): ValidateJson<CreateTenant>,
) -> Result<(StatusCode, Json<TenantProvisioned>)> {
    tracing::debug!(target: TRACING_TARGET, slug = %request.slug, "Creating tenant");

    let (subaccount_id, settings) = match request.bolna_subaccount_id.clone() {
        Some(subaccount_id) => (subaccount_id, None),
        None => provision_subaccount(&provider, &request.display_name, &request.slug).await,
    };

    let password_hash = auth_hasher.hash_password(&request.admin_password)?;
    let new_tenant = request.tenant_model(subaccount_id, settings);

    let (tenant, admin_user) = conn
        .transaction(|conn| {
            Box::pin(async move {
                let tenant = conn.create_tenant(new_tenant).await?;
                let admin_user = conn
                    .create_tenant_user(request.admin_model(tenant.id, password_hash))
                    .await?;
                Ok::<(model::Tenant, model::TenantUser), PgError>((tenant, admin_user))
            })
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        tenant_id = %tenant.id,
        slug = %tenant.slug,
        pending_subaccount = tenant.has_pending_subaccount(),
        "Tenant provisioned",
    );

    let response = TenantProvisioned::from_models(tenant, admin_user);
    Ok((StatusCode::CREATED, Json(response)))
}

fn create_tenant_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create tenant")
        .description(
            "Provisions a tenant with its first admin user. Creates a provider \
             sub-account unless one is supplied; provider failures fall back to \
             a placeholder id.",
        )
        .response::<201, Json<TenantProvisioned>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Lists tenants, most recently created first.
#[tracing::instrument(skip_all, fields(admin_id = %admin_session.admin().id))]
async fn list_tenants(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Tenants>)> {
    let tenants = conn.list_tenants(pagination.into_pagination()).await?;
    let tenants: Tenants = tenants.into_iter().map(Tenant::from_model).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        tenant_count = tenants.len(),
        "Tenants listed",
    );

    Ok((StatusCode::OK, Json(tenants)))
}

fn list_tenants_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List tenants")
        .description("Returns all tenants, most recently created first.")
        .response::<200, Json<Tenants>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Retrieves a single tenant.
#[tracing::instrument(
    skip_all,
    fields(
        admin_id = %admin_session.admin().id,
        tenant_id = %path_params.tenant_id,
    )
)]
async fn read_tenant(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<TenantPathParams>,
) -> Result<(StatusCode, Json<Tenant>)> {
    let Some(tenant) = conn.find_tenant_by_id(path_params.tenant_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    Ok((StatusCode::OK, Json(Tenant::from_model(tenant))))
}

fn read_tenant_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get tenant")
        .description("Returns a single tenant by id.")
        .response::<200, Json<Tenant>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates a tenant's name, plan, status or settings.
#[tracing::instrument(
    skip_all,
    fields(
        admin_id = %admin_session.admin().id,
        tenant_id = %path_params.tenant_id,
    )
)]
async fn update_tenant(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<TenantPathParams>,
    ValidateJson(request): ValidateJson<UpdateTenant>,
) -> Result<(StatusCode, Json<Tenant>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating tenant");

    let Some(_existing) = conn.find_tenant_by_id(path_params.tenant_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    let tenant = conn
        .update_tenant(path_params.tenant_id, request.into_model())
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        plan = %tenant.plan,
        status = %tenant.status,
        "Tenant updated",
    );

    Ok((StatusCode::OK, Json(Tenant::from_model(tenant))))
}

fn update_tenant_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update tenant")
        .description("Updates a tenant's display name, plan, status or settings.")
        .response::<200, Json<Tenant>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the users of one tenant.
#[tracing::instrument(
    skip_all,
    fields(
        admin_id = %admin_session.admin().id,
        tenant_id = %path_params.tenant_id,
    )
)]
async fn list_tenant_users(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<TenantPathParams>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Users>)> {
    let Some(tenant) = conn.find_tenant_by_id(path_params.tenant_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    let users = conn
        .list_tenant_users(tenant.id, pagination.into_pagination())
        .await?;
    let users: Users = users
        .into_iter()
        .map(crate::handler::response::User::from_model)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

fn list_tenant_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List tenant users")
        .description("Returns the users of one tenant, most recently created first.")
        .response::<200, Json<Users>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns routes for tenant administration.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/super-admin/tenants",
            post_with(create_tenant, create_tenant_docs).get_with(list_tenants, list_tenants_docs),
        )
        .api_route(
            "/api/super-admin/tenants/{tenant_id}",
            get_with(read_tenant, read_tenant_docs).patch_with(update_tenant, update_tenant_docs),
        )
        .api_route(
            "/api/super-admin/tenants/{tenant_id}/users",
            get_with(list_tenant_users, list_tenant_users_docs),
        )
        .with_path_items(|item| item.tag("Tenants"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn tenant_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/super-admin/tenants").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/super-admin/tenants")
            .json(&json!({
                "displayName": "Acme",
                "slug": "acme",
                "adminName": "Admin",
                "adminEmail": "admin@acme.test",
                "adminPassword": "super-secret-1"
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn tenant_detail_requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let tenant_id = uuid::Uuid::new_v4();
        let response = server
            .get(&format!("/api/super-admin/tenants/{tenant_id}"))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .get(&format!("/api/super-admin/tenants/{tenant_id}/users"))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
