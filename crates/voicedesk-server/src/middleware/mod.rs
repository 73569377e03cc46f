//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides the middleware stack for the server:
//! - Security (CORS, headers, body limits, compression)
//! - Observability (tracing, request IDs, sensitive header redaction)
//! - Recovery (panics, timeouts, service errors)
//! - OpenAPI documentation with Scalar UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use voicedesk_server::middleware::{
//!     RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//! };
//!
//! let app: Router<()> = Router::new()
//!     .with_default_recovery()
//!     .with_observability()
//!     .with_default_security();
//! ```

mod constants;
mod observability;
mod recovery;
mod security;
mod specification;

pub use crate::middleware::constants::{DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_FILE_BODY_SIZE};
pub use crate::middleware::observability::RouterObservabilityExt;
pub use crate::middleware::recovery::{RecoveryConfig, RouterRecoveryExt};
pub use crate::middleware::security::{
    CorsConfig, FrameOptions, ReferrerPolicy, RouterSecurityExt, SecurityHeadersConfig,
};
pub use crate::middleware::specification::{OpenApiConfig, RouterOpenApiExt};
