//! Health monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_postgres::PgClient;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for health monitoring.
const TRACING_TARGET: &str = "voicedesk_server::handler::monitors";

/// Reports server liveness and a database pool snapshot.
///
/// The endpoint is unauthenticated; it only exposes pool counters, never
/// data.
#[tracing::instrument(skip_all)]
async fn health(State(postgres): State<PgClient>) -> Result<(StatusCode, Json<HealthStatus>)> {
    let status = postgres.pool_status();

    tracing::debug!(
        target: TRACING_TARGET,
        size = status.size,
        available = status.available,
        "Health check served",
    );

    Ok((StatusCode::OK, Json(HealthStatus::new(status))))
}

fn health_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Reports server liveness and database pool status.")
        .response::<200, Json<HealthStatus>>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health, health_docs))
        .with_path_items(|item| item.tag("Monitors"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn health_endpoint_reports_pool_status() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/health").await;
        response.assert_status_success();

        let status = response.json::<HealthStatus>();
        assert_eq!(status.status, "ok");
        assert!(status.database.max_size > 0);

        Ok(())
    }
}
