//! User role enumeration for tenant-level access control.

use std::cmp;

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role and permission level of a tenant user.
///
/// This enumeration corresponds to the `USER_ROLE` PostgreSQL enum and
/// provides hierarchical access control within a tenant.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
pub enum UserRole {
    /// Full control over the tenant, including user management and billing
    #[db_rename = "admin"]
    #[serde(rename = "admin")]
    Admin,

    /// Can manage agents, campaigns and phone numbers, but not users
    #[db_rename = "manager"]
    #[serde(rename = "manager")]
    Manager,

    /// Operational access to assigned resources only
    #[db_rename = "agent"]
    #[serde(rename = "agent")]
    #[default]
    Agent,
}

impl UserRole {
    /// Returns whether this role has administrative privileges.
    #[inline]
    pub fn is_administrator(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Returns the hierarchical level of this role (higher number = more permissions).
    #[inline]
    pub const fn hierarchy_level(self) -> u8 {
        match self {
            UserRole::Agent => 1,
            UserRole::Manager => 2,
            UserRole::Admin => 3,
        }
    }

    /// Returns whether this role has equal or higher permissions than the other role.
    #[inline]
    pub const fn has_permission_level_of(self, other: UserRole) -> bool {
        self.hierarchy_level() >= other.hierarchy_level()
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.hierarchy_level().cmp(&other.hierarchy_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_outranks_manager_and_agent() {
        assert!(UserRole::Admin > UserRole::Manager);
        assert!(UserRole::Manager > UserRole::Agent);
        assert!(UserRole::Admin.has_permission_level_of(UserRole::Agent));
        assert!(!UserRole::Agent.has_permission_level_of(UserRole::Manager));
    }
}
