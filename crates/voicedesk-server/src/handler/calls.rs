//! Outbound call proxy handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::query::CallExecutionRepository;
use voicedesk_postgres::types::QuotaResource;

use crate::extract::{Json, Path, PgPool, TenantState};
use crate::handler::request::ExecutionPathParams;
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for call proxy operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::calls";

/// Places an outbound call through the provider.
///
/// Subject to the plan's monthly call quota, counted against the local
/// execution mirror for the current calendar month.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn make_call(
    session: TenantState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Placing outbound call");

    let current = conn
        .count_executions_this_month(session.tenant_id())
        .await?;
    let decision = session
        .tenant()
        .limits()
        .check_quota(QuotaResource::CallsPerMonth, current);
    if let Some(message) = decision.denial_message() {
        return Err(ErrorKind::Forbidden
            .with_message(message.to_owned())
            .with_resource("quota"));
    }

    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client.make_call(&payload).await.map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Outbound call placed");

    Ok((StatusCode::OK, Json(outcome)))
}

fn make_call_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Place call")
        .description(
            "Places an outbound call through the provider. Subject to the \
             plan's monthly call quota.",
        )
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Stops one in-flight call.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        execution_id = %path_params.execution_id,
    )
)]
async fn stop_call(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<ExecutionPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .stop_call(&path_params.execution_id)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Call stopped");

    Ok((StatusCode::OK, Json(outcome)))
}

fn stop_call_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Stop call")
        .description("Stops one in-flight call on the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for the call proxy surface.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/bolna/calls", post_with(make_call, make_call_docs))
        .api_route(
            "/api/bolna/call/{execution_id}/stop",
            post_with(stop_call, stop_call_docs),
        )
        .with_path_items(|item| item.tag("Calls"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn call_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/bolna/calls")
            .json(&json!({"agent_id": "agent-1", "recipient_phone_number": "+14155550100"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.post("/api/bolna/call/exec-1/stop").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
