//! API credential model for `PostgreSQL` database operations.

use std::fmt;

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::api_credentials;

/// Key under which the shared provider API key is stored.
pub const BOLNA_API_KEY: &str = "bolna_api_key";

/// Row in the key/value secret store.
///
/// Values are secrets. The manual [`fmt::Debug`] impl keeps them out of
/// logs.
#[derive(Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = api_credentials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApiCredential {
    /// Credential name, unique.
    pub key: String,
    /// Secret value.
    pub value: String,
    /// Timestamp when the value was last written.
    pub updated_at: Timestamp,
}

/// Data for inserting or replacing a credential.
#[derive(Clone, Insertable)]
#[diesel(table_name = api_credentials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewApiCredential {
    /// Credential name.
    pub key: String,
    /// Secret value.
    pub value: String,
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("key", &self.key)
            .field("value", &"***")
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl fmt::Debug for NewApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewApiCredential")
            .field("key", &self.key)
            .field("value", &"***")
            .finish()
    }
}
