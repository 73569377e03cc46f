//! Tenant session guard with database verification.
//!
//! This module provides [`TenantState`], the extractor protecting every
//! tenant-scoped endpoint. It validates the session token, loads the user
//! together with their tenant, and confirms both are still active.

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;
use uuid::Uuid;
use voicedesk_postgres::PgClient;
use voicedesk_postgres::model::{Tenant, TenantUser};
use voicedesk_postgres::query::TenantUserRepository;
use voicedesk_postgres::types::UserRole;

use super::SessionClaims;
use crate::extract::auth::{TRACING_TARGET_AUTHENTICATION, TRACING_TARGET_AUTHORIZATION};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::SessionKeys;

/// Verified tenant session state.
///
/// When extraction succeeds, the request carries a valid tenant-scoped token,
/// the user it references exists and is active, and the owning tenant is in
/// good standing. Suspended tenants and deactivated users are rejected with
/// `401 Unauthorized` even when the token itself is still valid.
///
/// Impersonation sessions pass through this guard like regular tenant
/// sessions; the impersonator is available through the claims.
///
/// Dereferences to the underlying [`SessionClaims`].
#[derive(Debug, Clone, Deref)]
pub struct TenantState {
    /// Validated claims from the session token.
    #[deref]
    claims: SessionClaims,
    user: TenantUser,
    tenant: Tenant,
}

impl TenantState {
    /// Returns the validated session claims.
    #[inline]
    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    /// Returns the verified tenant user.
    #[inline]
    pub fn user(&self) -> &TenantUser {
        &self.user
    }

    /// Returns the tenant this session is scoped to.
    #[inline]
    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    /// Returns the tenant identifier.
    #[inline]
    pub fn tenant_id(&self) -> Uuid {
        self.tenant.id
    }

    /// Returns the user identifier.
    #[inline]
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Requires the session user to hold one of the allowed roles.
    ///
    /// # Errors
    ///
    /// Returns `403 Forbidden` when the user's role is not in `allowed`.
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<()> {
        if allowed.contains(&self.user.role) {
            return Ok(());
        }

        tracing::warn!(
            target: TRACING_TARGET_AUTHORIZATION,
            user_id = %self.user.id,
            tenant_id = %self.tenant.id,
            role = %self.user.role,
            required = ?allowed,
            "Role check failed for tenant user"
        );

        Err(ErrorKind::Forbidden
            .with_message("You do not have permission to perform this action")
            .with_context(format!(
                "This operation requires one of the following roles: {}",
                allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
            .with_resource("authorization"))
    }

    /// Verifies claims against the database and builds the tenant state.
    async fn from_claims(claims: SessionClaims, pg_client: PgClient) -> Result<Self> {
        if !claims.is_tenant_session() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                token_id = %claims.token_id,
                subject_id = %claims.subject_id,
                kind = ?claims.kind,
                "Rejected non-tenant token on the tenant surface"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Tenant access required")
                .with_context("This endpoint requires a tenant user session")
                .with_resource("authentication"));
        }

        let mut conn = pg_client.get_connection().await.map_err(|db_error| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %db_error,
                subject_id = %claims.subject_id,
                "Database connection failed during tenant session verification"
            );
            ErrorKind::InternalServerError
                .with_message("Authentication verification is temporarily unavailable")
                .with_context("Unable to connect to authentication database")
        })?;

        let (user, tenant) = conn
            .find_user_with_tenant(claims.subject_id)
            .await
            .map_err(|db_error| {
                tracing::error!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    error = %db_error,
                    subject_id = %claims.subject_id,
                    "Database error during tenant user lookup"
                );
                ErrorKind::InternalServerError
                    .with_message("Authentication verification encountered an error")
                    .with_context("Unable to validate account credentials")
            })?
            .ok_or_else(|| {
                tracing::warn!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    token_id = %claims.token_id,
                    subject_id = %claims.subject_id,
                    "User referenced in token no longer exists"
                );
                ErrorKind::Unauthorized
                    .with_message("Account not found")
                    .with_context("Your account may have been deactivated")
                    .with_resource("authentication")
            })?;

        // A token minted for one tenant must not unlock another, even if
        // the user row moved since the token was issued
        if let Some(claimed_tenant) = claims.tenant_id
            && claimed_tenant != tenant.id
        {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                token_id = %claims.token_id,
                subject_id = %claims.subject_id,
                claimed_tenant = %claimed_tenant,
                actual_tenant = %tenant.id,
                "Tenant mismatch between token and database"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Your session is no longer valid")
                .with_context("Please sign in again to continue")
                .with_resource("authentication"));
        }

        if !user.is_active() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                user_id = %user.id,
                tenant_id = %tenant.id,
                "Rejected session for deactivated user"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Your account has been deactivated")
                .with_context("Contact your administrator to restore access")
                .with_resource("authentication"));
        }

        if !tenant.is_active() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                user_id = %user.id,
                tenant_id = %tenant.id,
                status = %tenant.status,
                "Rejected session for inactive tenant"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("This organization is suspended")
                .with_context("Contact support to restore access")
                .with_resource("authentication"));
        }

        Ok(Self {
            claims,
            user,
            tenant,
        })
    }
}

impl<S> FromRequestParts<S> for TenantState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    SessionKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Check for cached state to avoid repeated database queries
        if let Some(tenant_state) = parts.extensions.get::<Self>() {
            return Ok(tenant_state.clone());
        }

        let claims = SessionClaims::from_request_parts(parts, state).await?;
        let pg_client = PgClient::from_ref(state);
        let tenant_state = Self::from_claims(claims, pg_client).await?;

        // Cache the verified state for subsequent extractors in the same request
        parts.extensions.insert(tenant_state.clone());
        Ok(tenant_state)
    }
}

impl<S> OptionalFromRequestParts<S> for TenantState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    SessionKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <Self as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(tenant_state) => Ok(Some(tenant_state)),
            Err(_) => Ok(None),
        }
    }
}

impl aide::OperationInput for TenantState {}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use voicedesk_postgres::types::{PlanTier, TenantStatus, UserStatus};

    use super::*;

    fn test_state(role: UserRole) -> TenantState {
        let tenant = Tenant {
            id: Uuid::new_v4(),
            display_name: "Acme Support".to_owned(),
            slug: "acme-support".to_owned(),
            bolna_subaccount_id: "sub-acme".to_owned(),
            plan: PlanTier::Starter,
            status: TenantStatus::Active,
            settings: serde_json::json!({}),
            created_at: Timestamp::now().into(),
            updated_at: Timestamp::now().into(),
        };
        let user = TenantUser {
            id: Uuid::new_v4(),
            tenant_id: tenant.id,
            display_name: "Jordan Example".to_owned(),
            email: "jordan@example.com".to_owned(),
            password_hash: "unused".to_owned(),
            role,
            status: UserStatus::Active,
            created_at: Timestamp::now().into(),
            updated_at: Timestamp::now().into(),
        };
        let claims = SessionClaims::for_tenant_user(&user);

        TenantState {
            claims,
            user,
            tenant,
        }
    }

    #[test]
    fn admin_passes_role_checks() {
        let state = test_state(UserRole::Admin);
        assert!(state.require_role(&[UserRole::Admin]).is_ok());
        assert!(
            state
                .require_role(&[UserRole::Admin, UserRole::Manager])
                .is_ok()
        );
    }

    #[test]
    fn agent_is_denied_admin_operations() {
        let state = test_state(UserRole::Agent);
        let error = state.require_role(&[UserRole::Admin]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Forbidden);

        let error = state
            .require_role(&[UserRole::Admin, UserRole::Manager])
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Forbidden);
    }
}
