//! Phone number model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::phone_numbers;

/// Phone number provisioned for a tenant.
///
/// `bolna_phone_id` is `None` for numbers registered locally before the
/// provider assigned an id. Only rows with a provider id participate in
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = phone_numbers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PhoneNumber {
    /// Unique local identifier.
    pub id: Uuid,
    /// Tenant owning this number.
    pub tenant_id: Uuid,
    /// Phone id on the upstream provider, if assigned.
    pub bolna_phone_id: Option<String>,
    /// Number in E.164 format.
    pub phone_number: String,
    /// Free-form status label.
    pub status: String,
    /// Timestamp when the row was created.
    pub created_at: Timestamp,
    /// Timestamp when the row was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new phone number row.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = phone_numbers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPhoneNumber {
    /// Tenant owning this number.
    pub tenant_id: Uuid,
    /// Phone id on the upstream provider.
    pub bolna_phone_id: Option<String>,
    /// Number in E.164 format.
    pub phone_number: String,
    /// Status label.
    pub status: Option<String>,
}

/// Data for updating a phone number row.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = phone_numbers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdatePhoneNumber {
    /// Phone id on the upstream provider.
    pub bolna_phone_id: Option<Option<String>>,
    /// Status label.
    pub status: Option<String>,
}
