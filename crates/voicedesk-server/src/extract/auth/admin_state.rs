//! Super-admin session guard with database verification.
//!
//! This module provides [`AdminState`], the extractor protecting the platform
//! administration surface. Unlike plain JWT validation, it confirms the
//! super-admin account referenced by the token still exists.

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;
use voicedesk_postgres::PgClient;
use voicedesk_postgres::model::SuperAdmin;
use voicedesk_postgres::query::SuperAdminRepository;

use super::SessionClaims;
use crate::extract::auth::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::SessionKeys;

/// Verified super-admin session state.
///
/// When extraction succeeds, the request carries a cryptographically valid
/// super-admin token and the referenced operator account still exists in the
/// database. Every failure mode, including tenant-user tokens presented on
/// the admin surface, rejects with `401 Unauthorized`.
///
/// Dereferences to the underlying [`SessionClaims`].
#[derive(Debug, Clone, Deref)]
pub struct AdminState {
    /// Validated claims from the session token.
    #[deref]
    claims: SessionClaims,
    admin: SuperAdmin,
}

impl AdminState {
    /// Returns the validated session claims.
    #[inline]
    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    /// Returns the verified super-admin account.
    #[inline]
    pub fn admin(&self) -> &SuperAdmin {
        &self.admin
    }

    /// Verifies claims against the database and builds the admin state.
    async fn from_claims(claims: SessionClaims, pg_client: PgClient) -> Result<Self> {
        if !claims.is_super_admin() {
            tracing::warn!(
                target: TRACING_TARGET_AUTHENTICATION,
                token_id = %claims.token_id,
                subject_id = %claims.subject_id,
                kind = ?claims.kind,
                "Rejected non-admin token on the admin surface"
            );
            return Err(ErrorKind::Unauthorized
                .with_message("Administrator access required")
                .with_context("This endpoint requires a super-admin session")
                .with_resource("authentication"));
        }

        let mut conn = pg_client.get_connection().await.map_err(|db_error| {
            tracing::error!(
                target: TRACING_TARGET_AUTHENTICATION,
                error = %db_error,
                subject_id = %claims.subject_id,
                "Database connection failed during admin verification"
            );
            ErrorKind::InternalServerError
                .with_message("Authentication verification is temporarily unavailable")
                .with_context("Unable to connect to authentication database")
        })?;

        let admin = conn
            .find_super_admin_by_id(claims.subject_id)
            .await
            .map_err(|db_error| {
                tracing::error!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    error = %db_error,
                    subject_id = %claims.subject_id,
                    "Database error during admin account lookup"
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
                    "Admin account referenced in token no longer exists"
                );
                ErrorKind::Unauthorized
                    .with_message("Account not found")
                    .with_context("Your account may have been deactivated")
                    .with_resource("authentication")
            })?;

        Ok(Self { claims, admin })
    }
}

impl<S> FromRequestParts<S> for AdminState
where
    S: Sync + Send + 'static,
    PgClient: FromRef<S>,
    SessionKeys: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Check for cached state to avoid repeated database queries
        if let Some(admin_state) = parts.extensions.get::<Self>() {
            return Ok(admin_state.clone());
        }

        let claims = SessionClaims::from_request_parts(parts, state).await?;
        let pg_client = PgClient::from_ref(state);
        let admin_state = Self::from_claims(claims, pg_client).await?;

        // Cache the verified state for subsequent extractors in the same request
        parts.extensions.insert(admin_state.clone());
        Ok(admin_state)
    }
}

impl<S> OptionalFromRequestParts<S> for AdminState
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
            Ok(admin_state) => Ok(Some(admin_state)),
            Err(_) => Ok(None),
        }
    }
}

impl aide::OperationInput for AdminState {}
