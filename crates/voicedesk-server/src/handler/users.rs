//! Tenant user management handlers.
//!
//! Split across two surfaces: super admins manage users of any tenant
//! without quota checks, tenant admins manage their own users subject to
//! the plan's user quota.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::query::{TenantRepository, TenantUserRepository};
use voicedesk_postgres::types::{QuotaResource, UserRole};

use crate::extract::{AdminState, Json, Path, PgPool, Query, TenantState, ValidateJson};
use crate::handler::request::{
    CreateTenantUser, CreateUser, PaginationQuery, UpdateUser, UserPathParams,
};
use crate::handler::response::{ErrorResponse, User, Users};
use crate::handler::{ErrorKind, Result};
use crate::service::{AuthHasher, ServiceState};

/// Tracing target for user management.
const TRACING_TARGET: &str = "voicedesk_server::handler::users";

/// Creates a user in any tenant, bypassing the plan quota.
#[tracing::instrument(skip_all, fields(admin_id = %admin_session.admin().id))]
async fn create_user(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    State(auth_hasher): State<AuthHasher>,
    ValidateJson(request): ValidateJson<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    tracing::debug!(target: TRACING_TARGET, tenant_id = %request.tenant_id, "Creating user");

    let Some(tenant) = conn.find_tenant_by_id(request.tenant_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    let password_hash = auth_hasher.hash_password(&request.password)?;
    let user = conn
        .create_tenant_user(request.into_model(password_hash))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        tenant_id = %tenant.id,
        "User created",
    );

    Ok((StatusCode::CREATED, Json(User::from_model(user))))
}

fn create_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create user (super admin)")
        .description("Creates a user in any tenant. Not subject to plan quotas.")
        .response::<201, Json<User>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Updates any tenant user's profile, role, status or password.
#[tracing::instrument(
    skip_all,
    fields(
        admin_id = %admin_session.admin().id,
        user_id = %path_params.user_id,
    )
)]
async fn update_user(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    State(auth_hasher): State<AuthHasher>,
    Path(path_params): Path<UserPathParams>,
    ValidateJson(request): ValidateJson<UpdateUser>,
) -> Result<(StatusCode, Json<User>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating user");

    let Some(_existing) = conn.find_tenant_user_by_id(path_params.user_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("User not found")
            .with_resource("user"));
    };

    let password_hash = match request.password.as_deref() {
        Some(password) => Some(auth_hasher.hash_password(password)?),
        None => None,
    };

    let user = conn
        .update_tenant_user(path_params.user_id, request.into_model(password_hash))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        role = %user.role,
        status = %user.status,
        "User updated",
    );

    Ok((StatusCode::OK, Json(User::from_model(user))))
}

fn update_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update user (super admin)")
        .description("Updates a user's profile, role, status or password in any tenant.")
        .response::<200, Json<User>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Lists the users of the caller's tenant.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_own_users(
    session: TenantState,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Users>)> {
    let users = conn
        .list_tenant_users(session.tenant_id(), pagination.into_pagination())
        .await?;
    let users: Users = users.into_iter().map(User::from_model).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        user_count = users.len(),
        "Tenant users listed",
    );

    Ok((StatusCode::OK, Json(users)))
}

fn list_own_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List users")
        .description("Returns the users of the caller's tenant.")
        .response::<200, Json<Users>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Creates a user in the caller's tenant.
///
/// Requires the admin role and a free slot under the plan's user quota.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn create_own_user(
    session: TenantState,
    PgPool(mut conn): PgPool,
    State(auth_hasher): State<AuthHasher>,
    ValidateJson(request): ValidateJson<CreateTenantUser>,
) -> Result<(StatusCode, Json<User>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating tenant user");

    session.require_role(&[UserRole::Admin])?;

    let current = conn.count_tenant_users(session.tenant_id()).await?;
    let decision = session.tenant().limits().check_quota(QuotaResource::Users, current);
    if let Some(message) = decision.denial_message() {
        return Err(ErrorKind::Forbidden
            .with_message(message.to_owned())
            .with_resource("quota"));
    }

    let password_hash = auth_hasher.hash_password(&request.password)?;
    let user = conn
        .create_tenant_user(request.into_model(session.tenant_id(), password_hash))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        created_user_id = %user.id,
        role = %user.role,
        "Tenant user created",
    );

    Ok((StatusCode::CREATED, Json(User::from_model(user))))
}

fn create_own_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create user")
        .description(
            "Creates a user in the caller's tenant. Requires the admin role; \
             subject to the plan's user quota.",
        )
        .response::<201, Json<User>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Returns routes for user management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/super-admin/users", post_with(create_user, create_user_docs))
        .api_route(
            "/api/super-admin/users/{user_id}",
            patch_with(update_user, update_user_docs),
        )
        .api_route(
            "/api/tenant/users",
            get_with(list_own_users, list_own_users_docs)
                .post_with(create_own_user, create_own_user_docs),
        )
        .with_path_items(|item| item.tag("Users"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn user_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/tenant/users").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/super-admin/users")
            .json(&json!({
                "tenantId": uuid::Uuid::new_v4(),
                "displayName": "Sam",
                "email": "sam@example.com",
                "password": "super-secret-1"
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn stale_bearer_tokens_are_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .get("/api/tenant/users")
            .authorization_bearer("not-a-valid-token")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
