//! Provider reconciliation handlers.
//!
//! Both routes require the tenant admin role. Sync runs inline on the
//! request: the caller waits for the result and receives the counters of
//! the completed run.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::types::UserRole;

use crate::extract::{Json, TenantState};
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, ExecutionSyncOutcome, SyncOutcome};
use crate::service::{ServiceState, SyncService};

/// Tracing target for sync handlers.
const TRACING_TARGET: &str = "voicedesk_server::handler::syncs";

/// Reconciles the caller's tenant against the provider.
///
/// Deletes local agents and phone numbers that no longer exist upstream,
/// then backfills missing executions.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn sync_tenant(
    session: TenantState,
    State(sync): State<SyncService>,
) -> Result<(StatusCode, Json<SyncOutcome>)> {
    session.require_role(&[UserRole::Admin])?;

    let report = sync.sync_tenant(session.tenant()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        deleted_agents = report.deleted_agents,
        deleted_phone_numbers = report.deleted_phone_numbers,
        synced_executions = report.synced_executions,
        "Tenant reconciled",
    );

    Ok((StatusCode::OK, Json(SyncOutcome::from_report(report))))
}

fn sync_tenant_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Sync tenant")
        .description(
            "Reconciles the tenant's local mirror against the provider: removes \
             rows that disappeared upstream and backfills missing executions. \
             Requires the admin role.",
        )
        .response::<200, Json<SyncOutcome>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Backfills executions only, leaving agents and phone numbers untouched.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn sync_executions(
    session: TenantState,
    State(sync): State<SyncService>,
) -> Result<(StatusCode, Json<ExecutionSyncOutcome>)> {
    session.require_role(&[UserRole::Admin])?;

    let synced = sync.sync_executions(session.tenant()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        synced_executions = synced,
        "Executions backfilled",
    );

    Ok((StatusCode::OK, Json(ExecutionSyncOutcome::new(synced))))
}

fn sync_executions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Sync executions")
        .description(
            "Imports executions present upstream but missing locally. \
             Requires the admin role.",
        )
        .response::<200, Json<ExecutionSyncOutcome>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for provider reconciliation.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/tenant/sync", post_with(sync_tenant, sync_tenant_docs))
        .api_route(
            "/api/tenant/sync-executions",
            post_with(sync_executions, sync_executions_docs),
        )
        .with_path_items(|item| item.tag("Sync"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn sync_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.post("/api/tenant/sync").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.post("/api/tenant/sync-executions").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
