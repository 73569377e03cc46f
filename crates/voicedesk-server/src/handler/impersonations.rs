//! Super admin impersonation handlers.
//!
//! Impersonation issues a short-lived tenant-scoped token acting as a
//! tenant user. Every start and stop writes an audit row; the start token
//! is only returned after its audit row committed.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;
use voicedesk_postgres::PgConn;
use voicedesk_postgres::model::{NewAdminAuditLog, TenantUser};
use voicedesk_postgres::query::{AuditLogRepository, TenantRepository, TenantUserRepository};
use voicedesk_postgres::types::{AuditAction, OffsetPagination, UserRole};

use crate::extract::{AdminState, Json, Path, PgPool, SessionClaims, TenantState, ValidateJson};
use crate::handler::request::{StartImpersonation, TenantPathParams};
use crate::handler::response::{ErrorResponse, ImpersonationSession, ImpersonationStopped};
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceState, SessionKeys};

/// Tracing target for impersonation operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::impersonations";

/// Picks the impersonation target inside a tenant.
///
/// An explicit target must exist in the tenant and be active. Without one,
/// the tenant's first active admin (oldest first) is used.
async fn resolve_target(
    conn: &mut PgConn,
    tenant_id: Uuid,
    user_id: Option<Uuid>,
) -> Result<TenantUser> {
    if let Some(user_id) = user_id {
        let Some(user) = conn.find_tenant_user_by_id(user_id).await? else {
            return Err(ErrorKind::NotFound
                .with_message("User not found")
                .with_resource("user"));
        };
        if user.tenant_id != tenant_id {
            return Err(ErrorKind::NotFound
                .with_message("User not found")
                .with_resource("user"));
        }
        if !user.is_active() {
            return Err(ErrorKind::BadRequest
                .with_message("Cannot impersonate a deactivated user")
                .with_resource("user"));
        }
        return Ok(user);
    }

    let users = conn
        .list_tenant_users(tenant_id, OffsetPagination::default())
        .await?;
    // The listing is newest-first; take the oldest matching admin.
    users
        .into_iter()
        .rev()
        .find(|user| user.role == UserRole::Admin && user.is_active())
        .ok_or_else(|| {
            ErrorKind::NotFound
                .with_message("Tenant has no active admin user to impersonate")
                .with_resource("user")
        })
}

/// Starts an impersonation session for a tenant user.
///
/// The token is short-lived and passes the tenant guards like a regular
/// session, with the impersonator recorded in its claims.
#[tracing::instrument(
    skip_all,
    fields(
        admin_id = %admin_session.admin().id,
        tenant_id = %path_params.tenant_id,
    )
)]
async fn start_impersonation(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    State(session_keys): State<SessionKeys>,
    Path(path_params): Path<TenantPathParams>,
    ValidateJson(request): ValidateJson<StartImpersonation>,
) -> Result<(StatusCode, Json<ImpersonationSession>)> {
    tracing::debug!(target: TRACING_TARGET, "Starting impersonation");

    let Some(tenant) = conn.find_tenant_by_id(path_params.tenant_id).await? else {
        return Err(ErrorKind::NotFound
            .with_message("Tenant not found")
            .with_resource("tenant"));
    };

    let user = resolve_target(&mut conn, tenant.id, request.user_id).await?;

    let claims = SessionClaims::for_impersonation(&user, admin_session.admin());
    let token = claims.sign(session_keys.encoding_key())?;

    // The audit row gates the token: a failed write means no session.
    conn.append_audit_log(NewAdminAuditLog {
        action: AuditAction::ImpersonationStart,
        admin_id: admin_session.admin().id,
        impersonator_id: Some(user.id),
        tenant_id: Some(tenant.id),
        details: Some(serde_json::json!({
            "token_id": claims.token_id,
            "expires_at": claims.expires_at,
        })),
    })
    .await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        token_id = %claims.token_id,
        "Impersonation started",
    );

    let session = ImpersonationSession::new(token, claims.expires_at, user, tenant);
    Ok((StatusCode::OK, Json(session)))
}

fn start_impersonation_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Start impersonation")
        .description(
            "Issues a short-lived token acting as a tenant user. Defaults to \
             the tenant's first active admin when no target is given. The \
             session is audited.",
        )
        .response::<200, Json<ImpersonationSession>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Closes an impersonation session.
///
/// Called with the impersonation token itself; writes the closing audit
/// row. The token stays technically valid until it expires, the audit
/// trail records the explicit stop.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn stop_impersonation(
    session: TenantState,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<ImpersonationStopped>)> {
    if !session.claims().is_impersonation() {
        return Err(ErrorKind::BadRequest
            .with_message("This session is not an impersonation session")
            .with_resource("impersonation"));
    }

    let Some(admin_id) = session.claims().impersonator_id else {
        return Err(ErrorKind::Unauthorized
            .with_message("Impersonation token carries no impersonator")
            .with_resource("impersonation"));
    };

    conn.append_audit_log(NewAdminAuditLog {
        action: AuditAction::ImpersonationStop,
        admin_id,
        impersonator_id: Some(session.user_id()),
        tenant_id: Some(session.tenant_id()),
        details: Some(serde_json::json!({
            "token_id": session.claims().token_id,
        })),
    })
    .await?;

    tracing::info!(
        target: TRACING_TARGET,
        admin_id = %admin_id,
        user_id = %session.user_id(),
        "Impersonation stopped",
    );

    let stopped = ImpersonationStopped::new(session.user_id(), session.tenant_id());
    Ok((StatusCode::OK, Json(stopped)))
}

fn stop_impersonation_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Stop impersonation")
        .description("Closes an impersonation session and writes the closing audit row.")
        .response::<200, Json<ImpersonationStopped>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Returns routes for impersonation.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/super-admin/tenants/{tenant_id}/impersonate",
            post_with(start_impersonation, start_impersonation_docs),
        )
        .api_route(
            "/api/super-admin/impersonation/stop",
            post_with(stop_impersonation, stop_impersonation_docs),
        )
        .with_path_items(|item| item.tag("Impersonation"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn impersonation_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let tenant_id = Uuid::new_v4();
        let response = server
            .post(&format!("/api/super-admin/tenants/{tenant_id}/impersonate"))
            .json(&json!({}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.post("/api/super-admin/impersonation/stop").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
