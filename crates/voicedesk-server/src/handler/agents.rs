//! Voice agent proxy handlers.
//!
//! Agents live on the provider; these routes relay the provider API and
//! keep a local mirror row per agent so that webhooks, quotas and the
//! execution history can resolve agents without a provider round trip.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use voicedesk_bolna::types::{BolnaAgent, ExecutionPage};
use voicedesk_postgres::model::{NewAgent, UpdateAgent};
use voicedesk_postgres::query::AgentRepository;
use voicedesk_postgres::types::QuotaResource;

use crate::extract::{Json, Path, PgPool, Query, TenantState};
use crate::handler::request::{AgentPathParams, ExecutionHistoryQuery};
use crate::handler::response::ErrorResponse;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for agent proxy operations.
const TRACING_TARGET: &str = "voicedesk_server::handler::agents";

/// Page size used when walking execution history for the CSV export.
const EXPORT_PAGE_SIZE: usize = 100;

/// Pulls the display name out of a provider agent payload.
///
/// Bolna nests the name under `agent_config`; older payloads carry it at
/// the top level.
fn agent_name_from(payload: &serde_json::Value) -> String {
    payload
        .pointer("/agent_config/agent_name")
        .or_else(|| payload.get("agent_name"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("Untitled agent")
        .to_owned()
}

/// Lists the tenant's agents straight from the provider.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_agents(
    session: TenantState,
    State(provider): State<ProviderGateway>,
) -> Result<(StatusCode, Json<Vec<BolnaAgent>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let agents = client.list_agents().await.map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        agent_count = agents.len(),
        "Agents listed from provider",
    );

    Ok((StatusCode::OK, Json(agents)))
}

fn list_agents_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List agents")
        .description("Returns the tenant's agents from the provider.")
        .response::<200, Json<Vec<BolnaAgent>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Creates an agent on the provider and mirrors it locally.
///
/// Subject to the plan's agent quota, counted against the local mirror.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn create_agent(
    session: TenantState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating agent");

    let current = conn.count_agents(session.tenant_id()).await?;
    let decision = session
        .tenant()
        .limits()
        .check_quota(QuotaResource::Agents, current);
    if let Some(message) = decision.denial_message() {
        return Err(ErrorKind::Forbidden
            .with_message(message.to_owned())
            .with_resource("quota"));
    }

    let client = provider.for_tenant(session.tenant()).await?;
    let created = client.create_agent(&payload).await.map_err(Error::from)?;

    let agent = conn
        .create_agent(NewAgent {
            tenant_id: session.tenant_id(),
            bolna_agent_id: created.agent_id.clone(),
            agent_name: agent_name_from(&payload),
            status: None,
            agent_config: payload.get("agent_config").cloned(),
            agent_prompts: payload.get("agent_prompts").cloned(),
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        agent_id = %agent.id,
        bolna_agent_id = %created.agent_id,
        "Agent created and mirrored",
    );

    let mut body = serde_json::Value::Object(created.extra);
    body["agent_id"] = serde_json::Value::String(created.agent_id);
    Ok((StatusCode::CREATED, Json(body)))
}

fn create_agent_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create agent")
        .description(
            "Creates an agent on the provider and mirrors it locally. Subject \
             to the plan's agent quota.",
        )
        .response::<201, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Relays one agent's full configuration from the provider.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn read_agent(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let agent = client
        .get_agent(&path_params.agent_id)
        .await
        .map_err(Error::from)?;

    Ok((StatusCode::OK, Json(agent)))
}

fn read_agent_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get agent")
        .description("Relays one agent's configuration from the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Updates an agent on the provider and refreshes the local mirror.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn update_agent(
    session: TenantState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating agent");

    let client = provider.for_tenant(session.tenant()).await?;
    let updated = client
        .update_agent(&path_params.agent_id, &payload)
        .await
        .map_err(Error::from)?;

    // The mirror row may be missing when the agent predates this server;
    // the next sync will recreate it.
    if let Some(local) = conn.find_agent_by_bolna_id(&path_params.agent_id).await?
        && local.tenant_id == session.tenant_id()
    {
        conn.update_agent(
            local.id,
            session.tenant_id(),
            UpdateAgent {
                agent_name: Some(agent_name_from(&payload)),
                status: None,
                agent_config: payload.get("agent_config").cloned(),
                agent_prompts: payload.get("agent_prompts").cloned(),
            },
        )
        .await?;
    }

    tracing::info!(target: TRACING_TARGET, "Agent updated");

    Ok((StatusCode::OK, Json(updated)))
}

fn update_agent_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update agent")
        .description("Updates an agent on the provider and refreshes the local mirror.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Deletes an agent on the provider and drops the local mirror row.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn delete_agent(
    session: TenantState,
    PgPool(mut conn): PgPool,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Deleting agent");

    let client = provider.for_tenant(session.tenant()).await?;
    let deleted = client
        .delete_agent(&path_params.agent_id)
        .await
        .map_err(Error::from)?;

    if let Some(local) = conn.find_agent_by_bolna_id(&path_params.agent_id).await?
        && local.tenant_id == session.tenant_id()
    {
        conn.delete_agent(local.id, session.tenant_id()).await?;
    }

    tracing::info!(target: TRACING_TARGET, "Agent deleted");

    Ok((StatusCode::OK, Json(deleted)))
}

fn delete_agent_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete agent")
        .description("Deletes an agent on the provider and drops the local mirror row.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Relays one page of an agent's execution history from the provider.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn list_agent_executions(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
    Query(query): Query<ExecutionHistoryQuery>,
) -> Result<(StatusCode, Json<ExecutionPage>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let page = client
        .list_agent_executions(
            &path_params.agent_id,
            query.page_number(),
            query.page_size(),
            &query.filters(),
        )
        .await
        .map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        page_number = query.page_number(),
        execution_count = page.data.len(),
        "Agent execution history page served",
    );

    Ok((StatusCode::OK, Json(page)))
}

fn list_agent_executions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List agent executions")
        .description(
            "Relays one page of an agent's execution history from the provider. \
             Supports status, call type, provider and date range filters.",
        )
        .response::<200, Json<ExecutionPage>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Stops every queued call of an agent.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn stop_agent_calls(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let outcome = client
        .stop_agent_calls(&path_params.agent_id)
        .await
        .map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Queued agent calls stopped");

    Ok((StatusCode::OK, Json(outcome)))
}

fn stop_agent_calls_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Stop agent calls")
        .description("Stops every queued call of an agent on the provider.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Exports an agent's full execution history as a CSV download.
///
/// Pages through the provider history until exhausted; large histories
/// produce proportionally large responses.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        agent_id = %path_params.agent_id,
    )
)]
async fn export_agent_executions(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Path(path_params): Path<AgentPathParams>,
) -> Result<Response> {
    let client = provider.for_tenant(session.tenant()).await?;
    let filters = voicedesk_bolna::types::ExecutionFilters::default();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "execution_id",
            "status",
            "call_type",
            "duration_secs",
            "recording_url",
            "created_at",
        ])
        .map_err(csv_error)?;

    let mut page_number = 1;
    let mut exported = 0usize;
    loop {
        let page = client
            .list_agent_executions(
                &path_params.agent_id,
                page_number,
                EXPORT_PAGE_SIZE,
                &filters,
            )
            .await
            .map_err(Error::from)?;
        let is_last = page.is_last(EXPORT_PAGE_SIZE);

        for execution in &page.data {
            let call_type = execution
                .telephony_data
                .as_ref()
                .and_then(|data| data.call_type.as_deref());
            writer
                .write_record([
                    execution.id.as_str(),
                    execution.status.as_deref().unwrap_or_default(),
                    call_type.unwrap_or_default(),
                    &execution
                        .duration_secs()
                        .map(|secs| secs.to_string())
                        .unwrap_or_default(),
                    execution.recording().unwrap_or_default(),
                    execution.created_at.as_deref().unwrap_or_default(),
                ])
                .map_err(csv_error)?;
            exported += 1;
        }

        if is_last {
            break;
        }
        page_number += 1;
    }

    let body = writer
        .into_inner()
        .map_err(|err| csv_error(csv::Error::from(err.into_error())))?;

    tracing::info!(
        target: TRACING_TARGET,
        execution_count = exported,
        "Agent execution history exported",
    );

    let filename = format!(
        "attachment; filename=\"executions-{}.csv\"",
        path_params.agent_id
    );
    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_owned()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        body,
    );
    Ok(response.into_response())
}

/// Maps a CSV rendering failure to a 500.
fn csv_error(err: csv::Error) -> Error<'static> {
    tracing::error!(target: TRACING_TARGET, error = %err, "CSV export failed");
    ErrorKind::InternalServerError.with_message("Failed to render the CSV export")
}

fn export_agent_executions_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Export agent executions")
        .description("Downloads an agent's full execution history as a CSV file.")
        .response::<200, String>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for the agent proxy surface.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/bolna/agents",
            get_with(list_agents, list_agents_docs).post_with(create_agent, create_agent_docs),
        )
        .api_route(
            "/api/bolna/agents/{agent_id}",
            get_with(read_agent, read_agent_docs)
                .put_with(update_agent, update_agent_docs)
                .delete_with(delete_agent, delete_agent_docs),
        )
        .api_route(
            "/api/bolna/agents/{agent_id}/executions",
            get_with(list_agent_executions, list_agent_executions_docs),
        )
        .api_route(
            "/api/bolna/agents/{agent_id}/stop",
            post_with(stop_agent_calls, stop_agent_calls_docs),
        )
        .api_route(
            "/api/bolna/agents/{agent_id}/export",
            get_with(export_agent_executions, export_agent_executions_docs),
        )
        .with_path_items(|item| item.tag("Agents"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[test]
    fn agent_name_prefers_the_nested_config() {
        let payload = json!({
            "agent_config": {"agent_name": "Receptionist"},
            "agent_name": "Legacy name"
        });
        assert_eq!(agent_name_from(&payload), "Receptionist");

        let payload = json!({"agent_name": "Legacy name"});
        assert_eq!(agent_name_from(&payload), "Legacy name");

        let payload = json!({});
        assert_eq!(agent_name_from(&payload), "Untitled agent");
    }

    #[tokio::test]
    async fn agent_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/bolna/agents").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/bolna/agents")
            .json(&json!({"agent_config": {"agent_name": "Receptionist"}}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/bolna/agents/agent-1/export").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
