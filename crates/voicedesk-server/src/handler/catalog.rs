//! Voice and model catalog proxy handlers.
//!
//! Both listings degrade gracefully: a 404 from the provider answers with
//! the built-in catalog instead of an error, so agent builders always see
//! something to pick from. The model listing keeps its legacy
//! `/user/model/all` path for front-end compatibility.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_bolna::types::{Model, Voice};

use crate::extract::{Json, TenantState};
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for catalog proxy operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::catalog";

/// Lists the available synthesizer voices.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_voices(
    session: TenantState,
    State(provider): State<ProviderGateway>,
) -> Result<(StatusCode, Json<Vec<Voice>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let voices = client.list_voices().await.map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        voice_count = voices.len(),
        "Voices listed",
    );

    Ok((StatusCode::OK, Json(voices)))
}

fn list_voices_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List voices")
        .description(
            "Returns the available synthesizer voices; falls back to a \
             built-in catalog when the provider has none.",
        )
        .response::<200, Json<Vec<Voice>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Lists the available language models.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_models(
    session: TenantState,
    State(provider): State<ProviderGateway>,
) -> Result<(StatusCode, Json<Vec<Model>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let models = client.list_models().await.map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        model_count = models.len(),
        "Models listed",
    );

    Ok((StatusCode::OK, Json(models)))
}

fn list_models_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List models")
        .description(
            "Returns the available language models; falls back to a built-in \
             catalog when the provider has none.",
        )
        .response::<200, Json<Vec<Model>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Registers a custom model with the provider.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn register_custom_model(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let registered = client
        .register_custom_model(&payload)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Custom model registered");

    Ok((StatusCode::CREATED, Json(registered)))
}

fn register_custom_model_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Register custom model")
        .description("Registers a custom language model with the provider.")
        .response::<201, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for the catalog proxy surface.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/bolna/voices", get_with(list_voices, list_voices_docs))
        .api_route("/user/model/all", get_with(list_models, list_models_docs))
        .api_route(
            "/api/bolna/models/custom",
            post_with(register_custom_model, register_custom_model_docs),
        )
        .with_path_items(|item| item.tag("Catalog"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn catalog_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/bolna/voices").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/user/model/all").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/bolna/models/custom")
            .json(&json!({"model": "custom-llm", "provider": "openai"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
