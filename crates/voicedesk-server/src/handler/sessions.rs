//! Credential exchange handlers for all three login surfaces.
//!
//! Failed logins are indistinguishable from the outside: a missing account
//! burns a dummy password verification and every credential failure answers
//! the same 401, so neither timing nor the response body reveals whether an
//! email is registered.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::PgClient;
use voicedesk_postgres::model::{Tenant, TenantUser};
use voicedesk_postgres::query::{SuperAdminRepository, TenantRepository, TenantUserRepository};

use crate::extract::{Json, Path, SessionClaims, ValidateJson};
use crate::handler::request::{LoginCredentials, TenantSlugPathParams};
use crate::handler::response::{AdminSession, ErrorResponse, TenantSession};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{AuthHasher, ServiceState, SessionKeys};

/// Tracing target for login operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::sessions";

/// The uniform credential failure.
///
/// Matches the error [`AuthHasher::verify_password`] produces for a wrong
/// password, so "no such account" and "wrong password" are the same to the
/// caller.
fn invalid_credentials() -> Error<'static> {
    ErrorKind::Unauthorized
        .with_message("Authentication failed")
        .with_context("Invalid credentials")
        .with_resource("authentication")
}

/// Verifies a tenant user's credentials and standing, then signs a session.
///
/// Shared by the open and the tenant-scoped login routes. The password is
/// always checked before account standing, so a deactivated account still
/// requires the correct password to learn it is deactivated.
fn issue_tenant_session(
    auth_hasher: &AuthHasher,
    session_keys: &SessionKeys,
    user: TenantUser,
    tenant: Tenant,
    password: &str,
) -> Result<TenantSession> {
    auth_hasher.verify_password(password, &user.password_hash)?;

    if !user.is_active() {
        return Err(ErrorKind::Unauthorized
            .with_message("Your account has been deactivated")
            .with_context("Contact your administrator to restore access")
            .with_resource("authentication"));
    }

    if !tenant.is_active() {
        return Err(ErrorKind::Unauthorized
            .with_message("This organization is suspended")
            .with_context("Contact support to restore access")
            .with_resource("authentication"));
    }

    let claims = SessionClaims::for_tenant_user(&user);
    let token = claims.sign(session_keys.encoding_key())?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        tenant_id = %tenant.id,
        "Tenant user logged in",
    );

    Ok(TenantSession::new(token, user, tenant))
}

/// Authenticates a super admin and issues a platform-scoped session token.
#[tracing::instrument(skip_all)]
async fn super_admin_login(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    State(session_keys): State<SessionKeys>,
    ValidateJson(request): ValidateJson<LoginCredentials>,
) -> Result<(StatusCode, Json<AdminSession>)> {
    tracing::debug!(target: TRACING_TARGET, "Super admin login attempt");

    let mut conn = pg_client.get_connection().await?;

    let Some(admin) = conn.find_super_admin_by_email(&request.email).await? else {
        auth_hasher.verify_dummy_password(&request.password);
        return Err(invalid_credentials());
    };

    auth_hasher.verify_password(&request.password, &admin.password_hash)?;

    let claims = SessionClaims::for_super_admin(&admin);
    let token = claims.sign(session_keys.encoding_key())?;

    tracing::info!(
        target: TRACING_TARGET,
        admin_id = %admin.id,
        "Super admin logged in",
    );

    Ok((StatusCode::OK, Json(AdminSession::new(token, admin))))
}

fn super_admin_login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Super admin login")
        .description("Exchanges super admin credentials for a bearer token.")
        .response::<200, Json<AdminSession>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Authenticates a tenant user by email alone.
///
/// Emails are globally unique, so no tenant context is needed; the session
/// is scoped to the tenant the account belongs to.
#[tracing::instrument(skip_all)]
async fn tenant_user_login(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    State(session_keys): State<SessionKeys>,
    ValidateJson(request): ValidateJson<LoginCredentials>,
) -> Result<(StatusCode, Json<TenantSession>)> {
    tracing::debug!(target: TRACING_TARGET, "Tenant user login attempt");

    let mut conn = pg_client.get_connection().await?;

    let Some(user) = conn.find_tenant_user_by_email(&request.email).await? else {
        auth_hasher.verify_dummy_password(&request.password);
        return Err(invalid_credentials());
    };

    let Some(tenant) = conn.find_tenant_by_id(user.tenant_id).await? else {
        auth_hasher.verify_dummy_password(&request.password);
        return Err(invalid_credentials());
    };

    let session = issue_tenant_session(
        &auth_hasher,
        &session_keys,
        user,
        tenant,
        &request.password,
    )?;

    Ok((StatusCode::OK, Json(session)))
}

fn tenant_user_login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Tenant user login")
        .description("Exchanges tenant user credentials for a bearer token.")
        .response::<200, Json<TenantSession>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Authenticates a tenant user against an explicit organization slug.
///
/// An account that exists under a different tenant fails exactly like a
/// missing account.
#[tracing::instrument(skip_all, fields(slug = %path_params.slug))]
async fn scoped_tenant_login(
    State(pg_client): State<PgClient>,
    State(auth_hasher): State<AuthHasher>,
    State(session_keys): State<SessionKeys>,
    Path(path_params): Path<TenantSlugPathParams>,
    ValidateJson(request): ValidateJson<LoginCredentials>,
) -> Result<(StatusCode, Json<TenantSession>)> {
    tracing::debug!(target: TRACING_TARGET, "Scoped tenant login attempt");

    let mut conn = pg_client.get_connection().await?;

    let Some(tenant) = conn.find_tenant_by_slug(&path_params.slug).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    let Some(user) = conn.find_tenant_user_by_email(&request.email).await? else {
        auth_hasher.verify_dummy_password(&request.password);
        return Err(invalid_credentials());
    };

    if user.tenant_id != tenant.id {
        auth_hasher.verify_dummy_password(&request.password);
        return Err(invalid_credentials());
    }

    let session = issue_tenant_session(
        &auth_hasher,
        &session_keys,
        user,
        tenant,
        &request.password,
    )?;

    Ok((StatusCode::OK, Json(session)))
}

fn scoped_tenant_login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Tenant-scoped login")
        .description("Authenticates a tenant user against an explicit organization slug.")
        .response::<200, Json<TenantSession>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns routes for credential exchange.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/super-admin/login",
            post_with(super_admin_login, super_admin_login_docs),
        )
        .api_route(
            "/api/auth/login",
            post_with(tenant_user_login, tenant_user_login_docs),
        )
        .api_route(
            "/api/tenants/{slug}/login",
            post_with(scoped_tenant_login, scoped_tenant_login_docs),
        )
        .with_path_items(|item| item.tag("Sessions"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn login_rejects_malformed_email() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "not-an-email", "password": "hunter2"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_missing_password() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/super-admin/login")
            .json(&json!({"email": "admin@example.com"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_non_json_bodies() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/auth/login")
            .text("email=admin@example.com")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }
}
