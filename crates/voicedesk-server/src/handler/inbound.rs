//! Inbound IVR configuration proxy handlers.
//!
//! Linking a phone number to an agent for inbound calls happens entirely
//! on the provider; payloads are relayed unchanged.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;

use crate::extract::{Json, TenantState};
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for inbound configuration operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::inbound";

/// Links a phone number to an agent for inbound calls.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn setup_inbound(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client.setup_inbound(&payload).await.map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Inbound agent linked");

    Ok((StatusCode::OK, Json(outcome)))
}

fn setup_inbound_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Set up inbound")
        .description("Links a phone number to an agent for inbound calls.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Unlinks a phone number from its inbound agent.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn unlink_inbound(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client.unlink_inbound(&payload).await.map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Inbound agent unlinked");

    Ok((StatusCode::OK, Json(outcome)))
}

fn unlink_inbound_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Unlink inbound")
        .description("Unlinks a phone number from its inbound agent.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for inbound IVR configuration.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/bolna/inbound/setup",
            post_with(setup_inbound, setup_inbound_docs),
        )
        .api_route(
            "/api/bolna/inbound/unlink",
            post_with(unlink_inbound, unlink_inbound_docs),
        )
        .with_path_items(|item| item.tag("Inbound"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn inbound_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/bolna/inbound/setup")
            .json(&json!({"phone_number": "+14155550100", "agent_id": "agent-1"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/bolna/inbound/unlink")
            .json(&json!({"phone_number": "+14155550100"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
