//! Authentication and authorization extractors.
//!
//! This module provides the session token handling and the two request guards
//! protecting the API surfaces:
//!
//! - [`SessionClaims`] - JWT claims structure and validation-only extractor
//! - [`AdminState`] - Super-admin session with database verification
//! - [`TenantState`] - Tenant user session with database verification

mod admin_state;
mod session_claims;
mod tenant_state;

pub use self::admin_state::AdminState;
pub use self::session_claims::{PrincipalKind, SessionClaims};
pub use self::tenant_state::TenantState;

/// Tracing target for token validation and session verification.
pub const TRACING_TARGET_AUTHENTICATION: &str = "voicedesk_server::authentication";

/// Tracing target for role and permission checks.
pub const TRACING_TARGET_AUTHORIZATION: &str = "voicedesk_server::authorization";
