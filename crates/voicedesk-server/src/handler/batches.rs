//! Batch calling proxy handlers.
//!
//! Batches are CSV uploads of call recipients managed entirely by the
//! provider; nothing is mirrored locally.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use voicedesk_bolna::types::{BatchFile, BolnaBatch};

use crate::extract::{Json, Path, TenantState, ValidateJson};
use crate::handler::request::{AgentPathParams, BatchPathParams, ScheduleBatch};
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for batch proxy operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::batches";

/// Parsed fields of a batch upload request.
struct BatchUpload {
    agent_id: String,
    file: BatchFile,
}

/// Reads the `agent_id` and `file` fields out of the multipart form.
async fn read_batch_upload(mut multipart: Multipart) -> Result<BatchUpload> {
    let mut agent_id = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        ErrorKind::BadRequest
            .with_message("Invalid multipart data")
            .with_context(format!("Failed to parse multipart form: {err}"))
    })? {
        match field.name() {
            Some("agent_id") => {
                let value = field.text().await.map_err(|err| {
                    ErrorKind::BadRequest
                        .with_message("Invalid agent_id field")
                        .with_context(err.to_string())
                })?;
                agent_id = Some(value);
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("recipients.csv")
                    .to_owned();
                let content = field.bytes().await.map_err(|err| {
                    ErrorKind::BadRequest
                        .with_message("Invalid file field")
                        .with_context(err.to_string())
                })?;
                file = Some(BatchFile::new(file_name, content.to_vec()));
            }
            _ => {}
        }
    }

    let Some(agent_id) = agent_id else {
        return Err(ErrorKind::BadRequest
            .with_message("Missing agent_id field")
            .with_resource("batch"));
    };
    let Some(file) = file else {
        return Err(ErrorKind::BadRequest
            .with_message("Missing file field")
            .with_resource("batch"));
    };

    Ok(BatchUpload { agent_id, file })
}

/// Uploads a recipient CSV and creates a batch on the provider.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn create_batch(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating batch");

    let upload = read_batch_upload(multipart).await?;

    let client = provider.for_tenant(session.tenant()).await?;
    let created = client
        .create_batch(&upload.agent_id, upload.file)
        .await
        .map_err(Error::from)?;

    tracing::info!(
        target: TRACING_TARGET,
        agent_id = %upload.agent_id,
        "Batch created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

fn create_batch_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create batch")
        .description(
            "Uploads a recipient CSV as multipart form data (`agent_id` and \
             `file` fields) and creates a batch on the provider.",
        )
        .response::<201, Json<serde_json::Value>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Lists the batches of one agent.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn list_agent_batches(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
) -> Result<(StatusCode, Json<Vec<BolnaBatch>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let batches = client
        .list_batches(&path_params.agent_id)
        .await
        .map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        batch_count = batches.len(),
        "Agent batches listed",
    );

    Ok((StatusCode::OK, Json(batches)))
}

fn list_agent_batches_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List agent batches")
        .description("Returns the batches of one agent from the provider.")
        .response::<200, Json<Vec<BolnaBatch>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Schedules an uploaded batch for a start time.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        batch_id = %path_params.batch_id,
    )
)]
async fn schedule_batch(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<BatchPathParams>,
    ValidateJson(request): ValidateJson<ScheduleBatch>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .schedule_batch(&path_params.batch_id, &request.scheduled_at)
        .await
        .map_err(Error::from)?;

    tracing::info!(
        target: TRACING_TARGET,
        scheduled_at = %request.scheduled_at,
        "Batch scheduled",
    );

    Ok((StatusCode::OK, Json(outcome)))
}

fn schedule_batch_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Schedule batch")
        .description("Schedules an uploaded batch to start at the given time.")
        .response::<200, Json<serde_json::Value>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Stops a running batch.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        batch_id = %path_params.batch_id,
    )
)]
async fn stop_batch(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<BatchPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .stop_batch(&path_params.batch_id)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Batch stopped");

    Ok((StatusCode::OK, Json(outcome)))
}

fn stop_batch_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Stop batch")
        .description("Stops a running batch on the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Downloads a batch's recipient CSV.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        batch_id = %path_params.batch_id,
    )
)]
async fn download_batch(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<BatchPathParams>,
) -> Result<Response> {
    let client = provider.for_tenant(session.tenant()).await?;
    let content = client
        .download_batch(&path_params.batch_id)
        .await
        .map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        size = content.len(),
        "Batch downloaded",
    );

    let filename = format!(
        "attachment; filename=\"batch-{}.csv\"",
        path_params.batch_id
    );
    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_owned()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        content,
    );
    Ok(response.into_response())
}

fn download_batch_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Download batch")
        .description("Downloads a batch's recipient CSV from the provider.")
        .response::<200, String>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Deletes a batch.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        batch_id = %path_params.batch_id,
    )
)]
async fn delete_batch(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<BatchPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .delete_batch(&path_params.batch_id)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Batch deleted");

    Ok((StatusCode::OK, Json(outcome)))
}

fn delete_batch_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete batch")
        .description("Deletes a batch on the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for the batch proxy surface.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/bolna/batches", post_with(create_batch, create_batch_docs))
        .api_route(
            "/api/bolna/agents/{agent_id}/batches",
            get_with(list_agent_batches, list_agent_batches_docs),
        )
        .api_route(
            "/api/bolna/batches/{batch_id}/schedule",
            post_with(schedule_batch, schedule_batch_docs),
        )
        .api_route(
            "/api/bolna/batches/{batch_id}/stop",
            post_with(stop_batch, stop_batch_docs),
        )
        .api_route(
            "/api/bolna/batches/{batch_id}/download",
            get_with(download_batch, download_batch_docs),
        )
        .api_route(
            "/api/bolna/batches/{batch_id}",
            delete_with(delete_batch, delete_batch_docs),
        )
        .with_path_items(|item| item.tag("Batches"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn batch_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/bolna/agents/agent-1/batches").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.post("/api/bolna/batches/batch-1/stop").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.delete("/api/bolna/batches/batch-1").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
