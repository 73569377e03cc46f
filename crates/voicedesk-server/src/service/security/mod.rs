//! Security-related internal services.

mod auth_hasher;
mod session_keys;

pub use crate::service::security::auth_hasher::AuthHasher;
pub use crate::service::security::session_keys::{SessionKeys, SessionKeysConfig};
