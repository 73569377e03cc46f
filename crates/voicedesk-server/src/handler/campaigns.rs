//! Campaign management handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::http::StatusCode;
use voicedesk_postgres::query::CampaignRepository;
use voicedesk_postgres::types::{QuotaResource, UserRole};

use crate::extract::{Json, PgPool, Query, TenantState, ValidateJson};
use crate::handler::request::{CreateCampaign, PaginationQuery};
use crate::handler::response::{Campaign, Campaigns, ErrorResponse};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for campaign management.
const TRACING_TARGET: &str = "voicedesk_server::handler::campaigns";

/// Lists the campaigns of the caller's tenant.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_campaigns(
    session: TenantState,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Campaigns>)> {
    let campaigns = conn
        .list_campaigns(session.tenant_id(), pagination.into_pagination())
        .await?;
    let campaigns: Campaigns = campaigns.into_iter().map(Campaign::from_model).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        campaign_count = campaigns.len(),
        "Campaigns listed",
    );

    Ok((StatusCode::OK, Json(campaigns)))
}

fn list_campaigns_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List campaigns")
        .description("Returns the campaigns of the caller's tenant, most recent first.")
        .response::<200, Json<Campaigns>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Creates a campaign in the caller's tenant.
///
/// Requires the admin or manager role and a free slot under the plan's
/// campaign quota. The campaign starts in the draft state.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn create_campaign(
    session: TenantState,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateCampaign>,
) -> Result<(StatusCode, Json<Campaign>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating campaign");

    session.require_role(&[UserRole::Admin, UserRole::Manager])?;

    let current = conn.count_campaigns(session.tenant_id()).await?;
    let decision = session
        .tenant()
        .limits()
        .check_quota(QuotaResource::Campaigns, current);
    if let Some(message) = decision.denial_message() {
        return Err(ErrorKind::Forbidden
            .with_message(message.to_owned())
            .with_resource("quota"));
    }

    let campaign = conn
        .create_campaign(request.into_model(session.tenant_id()))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        campaign_id = %campaign.id,
        status = %campaign.status,
        "Campaign created",
    );

    Ok((StatusCode::CREATED, Json(Campaign::from_model(campaign))))
}

fn create_campaign_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create campaign")
        .description(
            "Creates a draft campaign in the caller's tenant. Requires the admin \
             or manager role; subject to the plan's campaign quota.",
        )
        .response::<201, Json<Campaign>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
}

/// Returns routes for campaign management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/tenant/campaigns",
            get_with(list_campaigns, list_campaigns_docs)
                .post_with(create_campaign, create_campaign_docs),
        )
        .with_path_items(|item| item.tag("Campaigns"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn campaign_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/tenant/campaigns").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/tenant/campaigns")
            .json(&json!({"displayName": "Spring outreach"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
