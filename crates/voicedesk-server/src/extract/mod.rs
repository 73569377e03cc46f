//! Enhanced HTTP request extractors with improved error handling and validation.
//!
//! This module provides the custom Axum extractors used by every handler.
//! All extractors are designed to be drop-in replacements for their standard
//! Axum counterparts while providing additional features.
//!
//! # Extractor Categories
//!
//! ## Authentication & Authorization
//!
//! - [`SessionClaims`] - JWT claims with validation-only extraction
//! - [`AdminState`] - Super-admin session with database verification
//! - [`TenantState`] - Tenant user session with database verification
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - Enhanced JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Path`] - Path parameter extraction with detailed error context
//! - [`Query`] - Query parameter extraction with enhanced error messages
//!
//! ## Database Access
//!
//! - [`PgPool`] - Pooled database connection for repository operations

// Authentication and Authorization
pub mod auth;

// Request Data Extraction
pub mod reject;

// Database Access
mod pg_connection;

pub use crate::extract::auth::{AdminState, PrincipalKind, SessionClaims, TenantState};
pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
