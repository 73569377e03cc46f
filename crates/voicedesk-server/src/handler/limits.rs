//! Plan limit and usage reporting handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use voicedesk_postgres::query::{
    AgentRepository, CallExecutionRepository, CampaignRepository, PhoneNumberRepository,
    TenantUserRepository,
};

use crate::extract::{Json, PgPool, TenantState};
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, PlanUsage, TenantLimits};
use crate::service::ServiceState;

/// Tracing target for limit reporting.
const TRACING_TARGET: &str = "voicedesk_server::handler::limits";

/// Reports the caller's plan caps next to live resource counts.
///
/// Counts are measured at request time with one query per resource; they
/// are a snapshot, not a reservation.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn read_limits(
    session: TenantState,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<TenantLimits>)> {
    let tenant_id = session.tenant_id();

    let usage = PlanUsage {
        users: conn.count_tenant_users(tenant_id).await?,
        agents: conn.count_agents(tenant_id).await?,
        phone_numbers: conn.count_phone_numbers(tenant_id).await?,
        calls_this_month: conn.count_executions_this_month(tenant_id).await?,
        campaigns: conn.count_campaigns(tenant_id).await?,
    };

    let limits = session.tenant().limits();

    tracing::debug!(
        target: TRACING_TARGET,
        plan = %limits.tier,
        users = usage.users,
        agents = usage.agents,
        "Plan usage reported",
    );

    Ok((StatusCode::OK, Json(TenantLimits::new(limits, usage))))
}

fn read_limits_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get plan limits")
        .description("Returns the tenant's plan tier, its caps and live usage counts.")
        .response::<200, Json<TenantLimits>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Returns routes for plan limit reporting.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/tenant/limits", get_with(read_limits, read_limits_docs))
        .with_path_items(|item| item.tag("Limits"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn limits_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/tenant/limits").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
