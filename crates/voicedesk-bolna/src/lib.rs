#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library
pub const TRACING_TARGET: &str = "voicedesk_bolna";

/// Tracing target for client operations
pub const TRACING_TARGET_CLIENT: &str = "voicedesk_bolna::client";

/// Tracing target for API operations
pub const TRACING_TARGET_API: &str = "voicedesk_bolna::api";

mod client;
mod config;
mod error;
pub mod fallback;
pub mod signature;
pub mod types;
pub mod webhook;

pub use crate::client::{BolnaClient, SUBACCOUNT_HEADER};
pub use crate::config::{BolnaConfig, DEFAULT_TIMEOUT};
pub use crate::error::{BolnaError, BolnaResult};
