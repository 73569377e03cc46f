//! Knowledgebase proxy handlers.
//!
//! Knowledgebases are documents or crawled URLs attached to agents by the
//! provider. Creation is a multipart request carrying either a `file`
//! upload or a `url` field, never both.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use voicedesk_bolna::types::{Knowledgebase, KnowledgebaseFile};

use crate::extract::{Json, Path, TenantState};
use crate::handler::request::KnowledgebasePathParams;
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for knowledgebase proxy operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::knowledgebases";

/// Lists the tenant's knowledgebases.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_knowledgebases(
    session: TenantState,
    State(provider): State<ProviderGateway>,
) -> Result<(StatusCode, Json<Vec<Knowledgebase>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let knowledgebases = client.list_knowledgebases().await.map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        knowledgebase_count = knowledgebases.len(),
        "Knowledgebases listed",
    );

    Ok((StatusCode::OK, Json(knowledgebases)))
}

fn list_knowledgebases_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List knowledgebases")
        .description("Returns the tenant's knowledgebases from the provider.")
        .response::<200, Json<Vec<Knowledgebase>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Reads the `file` and `url` fields out of the multipart form.
///
/// Exclusivity is not enforced here; the provider client rejects the
/// invalid combinations with its canonical message.
async fn read_knowledgebase_upload(
    mut multipart: Multipart,
) -> Result<(Option<KnowledgebaseFile>, Option<String>)> {
    let mut file = None;
    let mut url = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        ErrorKind::BadRequest
            .with_message("Invalid multipart data")
            .with_context(format!("Failed to parse multipart form: {err}"))
    })? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("document").to_owned();
                let content = field.bytes().await.map_err(|err| {
                    ErrorKind::BadRequest
                        .with_message("Invalid file field")
                        .with_context(err.to_string())
                })?;
                file = Some(KnowledgebaseFile::new(file_name, content.to_vec()));
            }
            Some("url") => {
                let value = field.text().await.map_err(|err| {
                    ErrorKind::BadRequest
                        .with_message("Invalid url field")
                        .with_context(err.to_string())
                })?;
                url = Some(value);
            }
            _ => {}
        }
    }

    Ok((file, url))
}

/// Creates a knowledgebase from an uploaded file or a URL.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn create_knowledgebase(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating knowledgebase");

    let (file, url) = read_knowledgebase_upload(multipart).await?;

    let client = provider.for_tenant(session.tenant()).await?;
    let created = client
        .create_knowledgebase(file, url.as_deref())
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Knowledgebase created");

    Ok((StatusCode::CREATED, Json(created)))
}

fn create_knowledgebase_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create knowledgebase")
        .description(
            "Creates a knowledgebase from multipart form data carrying either \
             a `file` upload or a `url` field, never both.",
        )
        .response::<201, Json<serde_json::Value>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Deletes a knowledgebase.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        knowledgebase_id = %path_params.knowledgebase_id,
    )
)]
async fn delete_knowledgebase(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<KnowledgebasePathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .delete_knowledgebase(&path_params.knowledgebase_id)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Knowledgebase deleted");

    Ok((StatusCode::OK, Json(outcome)))
}

fn delete_knowledgebase_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete knowledgebase")
        .description("Deletes a knowledgebase on the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for the knowledgebase proxy surface.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/bolna/knowledgebase",
            get_with(list_knowledgebases, list_knowledgebases_docs)
                .post_with(create_knowledgebase, create_knowledgebase_docs),
        )
        .api_route(
            "/api/bolna/knowledgebase/{knowledgebase_id}",
            delete_with(delete_knowledgebase, delete_knowledgebase_docs),
        )
        .with_path_items(|item| item.tag("Knowledgebases"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn knowledgebase_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/bolna/knowledgebase").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.delete("/api/bolna/knowledgebase/kb-1").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
