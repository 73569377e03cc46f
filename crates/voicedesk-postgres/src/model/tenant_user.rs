//! Tenant user model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::tenant_users;
use crate::types::{UserRole, UserStatus};

/// User account scoped to a single tenant.
///
/// Emails are unique across all tenants, not just within one.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = tenant_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TenantUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Tenant this user belongs to.
    pub tenant_id: Uuid,
    /// Human-readable name (1-100 characters).
    pub display_name: String,
    /// Login email, unique case-insensitively across all tenants.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Role within the tenant.
    pub role: UserRole,
    /// Whether the user may sign in.
    pub status: UserStatus,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
    /// Timestamp when the user was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new tenant user.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = tenant_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTenantUser {
    /// Tenant this user belongs to.
    pub tenant_id: Uuid,
    /// Human-readable name.
    pub display_name: String,
    /// Login email.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Role within the tenant.
    pub role: Option<UserRole>,
    /// Whether the user may sign in.
    pub status: Option<UserStatus>,
}

/// Data for updating a tenant user.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tenant_users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateTenantUser {
    /// Human-readable name.
    pub display_name: Option<String>,
    /// Login email.
    pub email: Option<String>,
    /// Argon2 password hash.
    pub password_hash: Option<String>,
    /// Role within the tenant.
    pub role: Option<UserRole>,
    /// Whether the user may sign in.
    pub status: Option<UserStatus>,
}

impl TenantUser {
    /// Returns whether the user may authenticate.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns whether the user administers their tenant.
    #[inline]
    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }
}
