//! Phone number handlers, local registry and provider proxy.
//!
//! The tenant surface manages the local phone number rows; the proxy
//! surface relays provider inventory, search and purchases.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use voicedesk_bolna::types::BolnaPhoneNumber;
use voicedesk_postgres::query::PhoneNumberRepository;
use voicedesk_postgres::types::{QuotaResource, UserRole};

use crate::extract::{Json, PgPool, Query, TenantState, ValidateJson};
use crate::handler::request::{CreatePhoneNumber, PaginationQuery};
use crate::handler::response::{ErrorResponse, PhoneNumber, PhoneNumbers};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{ProviderGateway, ServiceState};

/// Tracing target for phone number management.
const TRACING_TARGET: &str = "voicedesk_server::handler::phone_numbers";

/// Lists the phone numbers of the caller's tenant.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_phone_numbers(
    session: TenantState,
    PgPool(mut conn): PgPool,
    Query(pagination): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<PhoneNumbers>)> {
    let numbers = conn
        .list_phone_numbers(session.tenant_id(), pagination.into_pagination())
        .await?;
    let numbers: PhoneNumbers = numbers.into_iter().map(PhoneNumber::from_model).collect();

    tracing::debug!(
        target: TRACING_TARGET,
        phone_number_count = numbers.len(),
        "Phone numbers listed",
    );

    Ok((StatusCode::OK, Json(numbers)))
}

fn list_phone_numbers_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List phone numbers")
        .description("Returns the phone numbers of the caller's tenant.")
        .response::<200, Json<PhoneNumbers>>()
        .response::<401, Json<ErrorResponse>>()
}

/// Registers a phone number with the caller's tenant.
///
/// Requires the admin role and a free slot under the plan's phone number
/// quota.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn create_phone_number(
    session: TenantState,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreatePhoneNumber>,
) -> Result<(StatusCode, Json<PhoneNumber>)> {
    tracing::debug!(target: TRACING_TARGET, "Registering phone number");

    session.require_role(&[UserRole::Admin])?;

    let current = conn.count_phone_numbers(session.tenant_id()).await?;
    let decision = session
        .tenant()
        .limits()
        .check_quota(QuotaResource::PhoneNumbers, current);
    if let Some(message) = decision.denial_message() {
        return Err(ErrorKind::Forbidden
            .with_message(message.to_owned())
            .with_resource("quota"));
    }

    let number = conn
        .create_phone_number(request.into_model(session.tenant_id()))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        phone_number_id = %number.id,
        "Phone number registered",
    );

    Ok((StatusCode::CREATED, Json(PhoneNumber::from_model(number))))
}

fn create_phone_number_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Register phone number")
        .description(
            "Registers a phone number with the caller's tenant. Requires the \
             admin role; subject to the plan's phone number quota.",
        )
        .response::<201, Json<PhoneNumber>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Lists the tenant's provider-side phone number inventory.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn list_provider_numbers(
    session: TenantState,
    State(provider): State<ProviderGateway>,
) -> Result<(StatusCode, Json<Vec<BolnaPhoneNumber>>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let numbers = client.list_phone_numbers().await.map_err(Error::from)?;

    tracing::debug!(
        target: TRACING_TARGET,
        phone_number_count = numbers.len(),
        "Provider phone numbers listed",
    );

    Ok((StatusCode::OK, Json(numbers)))
}

fn list_provider_numbers_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List provider phone numbers")
        .description("Returns the tenant's phone number inventory on the provider.")
        .response::<200, Json<Vec<BolnaPhoneNumber>>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Searches purchasable numbers on the provider.
///
/// Query parameters are relayed verbatim, e.g. `country`, `pattern`.
#[tracing::instrument(skip_all, fields(tenant_id = %session.tenant_id()))]
async fn search_provider_numbers(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let client = provider.for_tenant(session.tenant()).await?;
    let results = client
        .search_phone_numbers(&params)
        .await
        .map_err(Error::from)?;

    Ok((StatusCode::OK, Json(results)))
}

fn search_provider_numbers_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Search phone numbers")
        .description("Searches purchasable numbers on the provider; query parameters are relayed.")
        .response::<200, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Buys a phone number on the provider.
///
/// Requires the admin role. The purchase is provider-side only; register
/// the number locally through the tenant surface afterwards or let the
/// next sync pick it up.
#[tracing::instrument(
    skip_all,
    fields(
        tenant_id = %session.tenant_id(),
        user_id = %session.user_id(),
    )
)]
async fn buy_provider_number(
    session: TenantState,
    State(provider): State<ProviderGateway>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    tracing::debug!(target: TRACING_TARGET, "Buying phone number");

    session.require_role(&[UserRole::Admin])?;

    let client = provider.for_tenant(session.tenant()).await?;
    let purchased = client.buy_phone_number(&payload).await.map_err(Error::from)?;

    tracing::info!(target: TRACING_TARGET, "Phone number bought");

    Ok((StatusCode::CREATED, Json(purchased)))
}

fn buy_provider_number_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Buy phone number")
        .description("Buys a phone number on the provider. Requires the admin role.")
        .response::<201, Json<serde_json::Value>>()
        .response::<401, Json<ErrorResponse>>()
        .response::<403, Json<ErrorResponse>>()
        .response::<502, Json<ErrorResponse>>()
}

/// Returns routes for phone number management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/tenant/phone-numbers",
            get_with(list_phone_numbers, list_phone_numbers_docs)
                .post_with(create_phone_number, create_phone_number_docs),
        )
        .api_route(
            "/api/bolna/phone-numbers",
            get_with(list_provider_numbers, list_provider_numbers_docs)
                .post_with(buy_provider_number, buy_provider_number_docs),
        )
        .api_route(
            "/api/bolna/phone-numbers/search",
            get_with(search_provider_numbers, search_provider_numbers_docs),
        )
        .api_route(
            "/api/bolna/phone-numbers/buy",
            post_with(buy_provider_number, buy_provider_number_docs),
        )
        .with_path_items(|item| item.tag("Phone Numbers"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn phone_number_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/tenant/phone-numbers").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/tenant/phone-numbers")
            .json(&json!({"phoneNumber": "+14155550100"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    async fn provider_phone_routes_require_authentication() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes).await?;

        let response = server.get("/api/bolna/phone-numbers").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server.get("/api/bolna/phone-numbers/search").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/api/bolna/phone-numbers/buy")
            .json(&json!({"phone_number": "+14155550100"}))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
