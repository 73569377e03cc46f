//! User status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines whether a tenant user may sign in.
///
/// This enumeration corresponds to the `USER_STATUS` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[ExistingTypePath = "crate::schema::sql_types::UserStatus"]
pub enum UserStatus {
    /// User may authenticate and use the platform
    #[db_rename = "active"]
    #[serde(rename = "active")]
    #[default]
    Active,

    /// User is deactivated and all requests are rejected
    #[db_rename = "inactive"]
    #[serde(rename = "inactive")]
    Inactive,
}

impl UserStatus {
    /// Returns whether the user may authenticate.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, UserStatus::Active)
    }
}
