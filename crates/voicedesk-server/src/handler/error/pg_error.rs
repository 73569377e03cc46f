//! Constraint violation to HTTP error conversion handlers.
//!
//! This module provides organized handlers for converting PostgreSQL
//! constraint violations into appropriate HTTP error responses, one `From`
//! impl per table domain. Uniqueness violations become 409 responses,
//! validation check failures become 400 responses.

use voicedesk_postgres::PgError;
use voicedesk_postgres::types::{
    AgentConstraints, CallExecutionConstraints, CampaignConstraints, ConstraintViolation,
    SuperAdminConstraints, TenantConstraints, TenantUserConstraints,
};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversions.
const TRACING_TARGET: &str = "voicedesk_server::postgres_constraints";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::SuperAdmin(c) => c.into(),
            ConstraintViolation::Tenant(c) => c.into(),
            ConstraintViolation::TenantUser(c) => c.into(),
            ConstraintViolation::Agent(c) => c.into(),
            ConstraintViolation::Campaign(c) => c.into(),
            ConstraintViolation::CallExecution(c) => c.into(),
        }
    }
}

impl From<TenantConstraints> for Error<'static> {
    fn from(constraint: TenantConstraints) -> Self {
        let error = match constraint {
            TenantConstraints::DisplayNameLength => {
                ErrorKind::BadRequest.with_message("Tenant name length is out of range")
            }
            TenantConstraints::SlugFormat => {
                ErrorKind::BadRequest.with_message("Tenant slug must be lowercase alphanumeric")
            }
            TenantConstraints::SlugUnique => {
                ErrorKind::Conflict.with_message("A tenant with this slug already exists")
            }
            TenantConstraints::SubaccountUnique => ErrorKind::Conflict
                .with_message("This provider sub-account is already linked to another tenant"),
        };
        error.with_resource("tenant").into_static()
    }
}

impl From<TenantUserConstraints> for Error<'static> {
    fn from(constraint: TenantUserConstraints) -> Self {
        let error = match constraint {
            TenantUserConstraints::EmailLength => {
                ErrorKind::BadRequest.with_message("Email length is out of range")
            }
            TenantUserConstraints::DisplayNameLength => {
                ErrorKind::BadRequest.with_message("Display name length is out of range")
            }
            TenantUserConstraints::EmailUnique => {
                ErrorKind::Conflict.with_message("A user with this email already exists")
            }
        };
        error.with_resource("user").into_static()
    }
}

impl From<SuperAdminConstraints> for Error<'static> {
    fn from(constraint: SuperAdminConstraints) -> Self {
        let error = match constraint {
            SuperAdminConstraints::EmailLength => {
                ErrorKind::BadRequest.with_message("Email length is out of range")
            }
            SuperAdminConstraints::DisplayNameLength => {
                ErrorKind::BadRequest.with_message("Display name length is out of range")
            }
            SuperAdminConstraints::EmailUnique => {
                ErrorKind::Conflict.with_message("An admin with this email already exists")
            }
        };
        error.with_resource("super_admin").into_static()
    }
}

impl From<AgentConstraints> for Error<'static> {
    fn from(constraint: AgentConstraints) -> Self {
        let error = match constraint {
            AgentConstraints::BolnaAgentIdUnique => {
                ErrorKind::Conflict.with_message("This provider agent is already mirrored locally")
            }
        };
        error.with_resource("agent").into_static()
    }
}

impl From<CampaignConstraints> for Error<'static> {
    fn from(constraint: CampaignConstraints) -> Self {
        let error = match constraint {
            CampaignConstraints::DisplayNameLength => {
                ErrorKind::BadRequest.with_message("Campaign name length is out of range")
            }
        };
        error.with_resource("campaign").into_static()
    }
}

impl From<CallExecutionConstraints> for Error<'static> {
    fn from(constraint: CallExecutionConstraints) -> Self {
        let error = match constraint {
            CallExecutionConstraints::DurationMin => {
                ErrorKind::BadRequest.with_message("Call duration cannot be negative")
            }
            CallExecutionConstraints::BolnaExecutionIdUnique => {
                ErrorKind::Conflict.with_message("This execution is already recorded")
            }
        };
        error.with_resource("execution").into_static()
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Try to extract constraint violation
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                // Generic query error without constraint
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn uniqueness_violations_conflict() {
        let error: Error = TenantConstraints::SlugUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);

        let error: Error = TenantUserConstraints::EmailUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);

        let error: Error = CallExecutionConstraints::BolnaExecutionIdUnique.into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_violations_bad_request() {
        let error: Error = TenantConstraints::SlugFormat.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);

        let error: Error = CampaignConstraints::DisplayNameLength.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unified_violation_dispatch() {
        let violation = ConstraintViolation::new("tenants_slug_unique_idx")
            .expect("known constraint name must parse");
        let error: Error = violation.into();

        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("tenant"));
    }
}
