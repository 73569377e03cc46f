//! Provider webhook ingestion.
//!
//! The endpoint is unauthenticated at the session level; deliveries are
//! trusted through the HMAC signature over the raw body instead. The body
//! must therefore be read as raw bytes before any JSON parsing, the
//! signature covers the exact bytes on the wire.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use voicedesk_bolna::webhook::WebhookEvent;
use voicedesk_postgres::model::NewCallExecution;
use voicedesk_postgres::query::{AgentRepository, CallExecutionRepository};

use crate::extract::{Json, PgPool};
use crate::handler::response::{ErrorResponse, WebhookOutcome, WebhookReceipt};
use crate::handler::{ErrorKind, Result};
use crate::service::{ServiceState, WebhookVerifier};

/// Tracing target for webhook ingestion.
const TRACING_TARGET: &str = "voicedesk_server::handler::webhooks";

/// Header carrying the HMAC-SHA256 hex digest of the delivery body.
const SIGNATURE_HEADER: &str = "x-bolna-signature";

/// Ingests a call status notification from the provider.
///
/// Known body layouts are normalized by [`WebhookEvent`]. The execution row
/// is created on first sight of the provider execution id and refreshed in
/// place on redelivery, so deliveries are idempotent.
#[tracing::instrument(skip_all)]
async fn receive_webhook(
    State(verifier): State<WebhookVerifier>,
    PgPool(mut conn): PgPool,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<WebhookReceipt>)> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    verifier.verify(&body, signature)?;

    let event: WebhookEvent = serde_json::from_slice(&body).map_err(|error| {
        tracing::warn!(target: TRACING_TARGET, %error, "Unparseable webhook body");
        ErrorKind::BadRequest
            .with_message("Unrecognized webhook payload")
            .with_resource("webhook")
    })?;

    if event.execution_id().is_empty() || event.agent_id().is_empty() {
        return Err(ErrorKind::BadRequest
            .with_message("Webhook payload is missing an execution or agent id")
            .with_resource("webhook"));
    }

    let Some(agent) = conn.find_agent_by_bolna_id(event.agent_id()).await? else {
        tracing::warn!(
            target: TRACING_TARGET,
            agent_id = event.agent_id(),
            "Webhook for unknown agent",
        );

        return Err(ErrorKind::NotFound
            .with_message("No agent matches the webhook's agent id")
            .with_resource("agent"));
    };

    let details = event.details();
    let execution = NewCallExecution {
        tenant_id: agent.tenant_id,
        agent_id: agent.id,
        bolna_execution_id: event.execution_id().to_owned(),
        transcript: details.transcript.clone(),
        recording_url: details.recording_url.clone(),
        duration_secs: details.duration_secs(),
    };

    let (row, outcome) = match conn.insert_execution_if_missing(execution.clone()).await? {
        Some(row) => (row, WebhookOutcome::Inserted),
        None => {
            let row = conn.upsert_execution(execution).await?;
            (row, WebhookOutcome::Updated)
        }
    };

    tracing::info!(
        target: TRACING_TARGET,
        execution_id = %row.id,
        tenant_id = %agent.tenant_id,
        outcome = ?outcome,
        "Webhook ingested",
    );

    let receipt = WebhookReceipt::new(row.id, outcome);
    Ok((StatusCode::OK, Json(receipt)))
}

fn receive_webhook_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Receive provider webhook")
        .description(
            "Ingests a call status notification, verified against the shared \
             webhook secret. Redeliveries update the execution in place.",
        )
        .response::<200, Json<WebhookReceipt>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns routes for webhook ingestion.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/webhooks/bolna",
            post_with(receive_webhook, receive_webhook_docs),
        )
        .with_path_items(|item| item.tag("Webhooks"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use voicedesk_bolna::signature::sign_payload;

    use super::*;
    use crate::handler::test::{
        create_test_server_with_router, create_test_server_with_state, create_test_state,
    };

    #[tokio::test]
    async fn rejects_unsigned_delivery_when_secret_configured() -> anyhow::Result<()> {
        let state = create_test_state(Some("topsecret".to_owned())).await?;
        let server = create_test_server_with_state(routes(), state)?;

        let response = server
            .post("/api/webhooks/bolna")
            .json(&json!({"execution_id": "exec-1", "agent_id": "agent-1"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_tampered_signature() -> anyhow::Result<()> {
        let state = create_test_state(Some("topsecret".to_owned())).await?;
        let server = create_test_server_with_state(routes(), state)?;

        let body = br#"{"execution_id": "exec-1", "agent_id": "agent-1"}"#;
        let signature = sign_payload("wrong-secret", body);

        let response = server
            .post("/api/webhooks/bolna")
            .add_header(SIGNATURE_HEADER, signature)
            .bytes(Bytes::from_static(body))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unrecognized_payload() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/webhooks/bolna")
            .json(&json!({"status": "completed"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_ids() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/webhooks/bolna")
            .json(&json!({"execution_id": "", "agent_id": "agent-1"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        Ok(())
    }
}
