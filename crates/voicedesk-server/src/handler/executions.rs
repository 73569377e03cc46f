//! Call execution handlers.
//!
//! The tenant surface reads the local mirror; the proxy surface relays
//! execution detail and raw logs from the provider unchanged.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::query::CallExecutionRepository;

use crate::extract::{Json, Path, PgPool, Query, TenantState};
use crate::handler::request::{ExecutionPathParams, PaginationQuery};
use crate::handler::response::{ErrorResponse, Execution, Executions};
use crate::handler::{Error, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for execution handlers.
const TRACING_TARGET: &str = "voicedesk_server::handler::executions";

/// Lists the locally stored executions of the caller's tenant.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_executions(
    session: TenantState,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Executions>)> {
    let executions = conn
        .list_executions(session.tenant_id(), pagination.into_pagination())
        .await?;
    let executions: Executions = executions.into_iter().map(Execution::from_model).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        execution_count = executions.len(),
        "Executions listed",
    );

    Ok((StatusCode::OK, Json(executions)))
}

fn list_executions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List executions")
        .description("Returns the locally stored call executions of the caller's tenant.")
        .response::<200, Json<Executions>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Relays one execution's detail record from the provider.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        execution_id = %path_params.execution_id,
    )
)]
async fn read_execution(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<ExecutionPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let execution = client
        .get_execution(&path_params.execution_id)
        .await
        .map_err(Error::from)?;

    Ok((StatusCode::OK, Json(execution)))
}

fn read_execution_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get execution")
        .description("Relays one execution's detail record from the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Relays one execution's raw provider log.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        execution_id = %path_params.execution_id,
    )
)]
async fn read_execution_log(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<ExecutionPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let log = client
        .get_execution_log(&path_params.execution_id)
        .await
        .map_err(Error::from)?;

    Ok((StatusCode::OK, Json(log)))
}

fn read_execution_log_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get execution log")
        .description("Relays one execution's raw log from the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Answers the global execution listing with an empty page.
///
/// The provider has no cross-agent execution listing; the route exists so
/// front-end calls keep working and always receive an empty array.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_provider_executions(
    session: TenantState,
) -> Result<(StatusCode, Json<Vec<serde_json::Value>>)> {
    Ok((StatusCode::OK, Json(Vec::new())))
}

fn list_provider_executions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List provider executions")
        .description(
            "Always returns an empty list: the provider has no cross-agent \
             execution listing. Use the per-agent execution history instead.",
        )
        .response::<200, Json<Vec<serde_json::Value>>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Returns routes for call executions.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/tenant/executions",
            get_with(list_executions, list_executions_docs),
        )
        .api_route(
            "/api/bolna/executions",
            get_with(list_provider_executions, list_provider_executions_docs),
        )
        .api_route(
            "/api/bolna/executions/{execution_id}",
            get_with(read_execution, read_execution_docs),
        )
        .api_route(
            "/api/bolna/executions/{execution_id}/log",
            get_with(read_execution_log, read_execution_log_docs),
        )
        .with_path_items(|item| item.tag("Executions"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn execution_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/tenant/executions").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/bolna/executions").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/bolna/executions/exec-1").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/bolna/executions/exec-1/log").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
