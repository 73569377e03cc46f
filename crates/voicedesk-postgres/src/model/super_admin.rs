//! Super admin model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::super_admins;

/// Platform operator account with access to every tenant.
///
/// Super admins are provisioned out-of-band, there is no self-registration
/// path for them.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = super_admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SuperAdmin {
    /// Unique admin identifier.
    pub id: Uuid,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Human-readable name.
    pub display_name: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Timestamp when the admin was created.
    pub created_at: Timestamp,
    /// Timestamp when the admin was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new super admin.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = super_admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSuperAdmin {
    /// Login email.
    pub email: String,
    /// Human-readable name.
    pub display_name: String,
    /// Argon2 password hash.
    pub password_hash: String,
}

