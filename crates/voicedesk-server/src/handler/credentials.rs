//! Shared credential store handlers.
//!
//! Credentials are write-only: storing requires a super admin, and the
//! read surface only ever reports whether a key exists. Rewriting the
//! provider API key drops the cached provider client.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::model::BOLNA_API_KEY;
use voicedesk_postgres::query::ApiCredentialRepository;

use crate::extract::{AdminState, Json, Path, PgPool, SessionClaims, ValidateJson};
use crate::handler::request::{CredentialPathParams, StoreCredential};
use crate::handler::response::{CredentialStatus, CredentialStored, ErrorResponse};
use crate::handler::Result;
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for credential store operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::credentials";

/// Stores or rotates a shared credential.
///
/// Rotating the provider API key invalidates the cached provider client,
/// so the next provider call picks up the new key.
#[tracing::instrument(skip_all, fields(admin_id = %admin_session.admin().id))]
async fn store_credential(
    admin_session: AdminState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    ValidateJson(request): ValidateJson<StoreCredential>,
) -> Result<(StatusCode, Json<CredentialStored>)> {
    let key = request.key.clone();
    let credential = conn.put_credential(request.into_model()).await?;

    if key == BOLNA_API_KEY {
        provider.invalidate().await;
    }

    tracing::info!(
        target: TRACING_TARGET,
        key = %credential.key,
        "Credential stored",
    );

    Ok((StatusCode::OK, Json(CredentialStored::from_model(credential))))
}

fn store_credential_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Store credential")
        .description(
            "Stores or rotates a shared credential. The value is never echoed \
             back. Rotating the provider API key refreshes the cached client.",
        )
        .response::<200, Json<CredentialStored>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Reports whether a credential is stored under a key.
///
/// Any authenticated principal may ask; the value itself is never
/// returned.
#[tracing::instrument(skip_all, fields(key = %path_params.key))]
async fn read_credential_status(
    claims: SessionClaims,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<CredentialPathParams>,
) -> Result<(StatusCode, Json<CredentialStatus>)> {
    let exists = conn.credential_exists(&path_params.key).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        subject_id = %claims.subject_id,
        exists,
        "Credential status checked",
    );

    Ok((
        StatusCode::OK,
        Json(CredentialStatus::new(path_params.key, exists)),
    ))
}

fn read_credential_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Check credential")
        .description("Reports whether a credential is stored under the key. Never returns the value.")
        .response::<200, Json<CredentialStatus>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Returns routes for the credential store.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/keys", post_with(store_credential, store_credential_docs))
        .api_route(
            "/api/keys/{key}",
            get_with(read_credential_status, read_credential_status_docs),
        )
        .with_path_items(|item| item.tag("Credentials"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn credential_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server
            .post("/api/keys")
            .json(&json!({"key": "bolna_api_key", "value": "bn-live-1234"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/keys/bolna_api_key").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
