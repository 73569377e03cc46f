//! Campaign model for `PostgreSQL` database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::campaigns;
use crate::types::CampaignStatus;

/// Outbound calling campaign over a list of contacts.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Campaign {
    /// Unique campaign identifier.
    pub id: Uuid,
    /// Tenant owning this campaign.
    pub tenant_id: Uuid,
    /// Agent placing the calls, if assigned.
    pub agent_id: Option<Uuid>,
    /// Human-readable campaign name (1-100 characters).
    pub display_name: String,
    /// Lifecycle state.
    pub status: CampaignStatus,
    /// Contact list as a JSON array.
    pub contacts: serde_json::Value,
    /// Optional schedule definition.
    pub schedule: Option<serde_json::Value>,
    /// Timestamp when the campaign was created.
    pub created_at: Timestamp,
    /// Timestamp when the campaign was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new campaign.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCampaign {
    /// Tenant owning this campaign.
    pub tenant_id: Uuid,
    /// Agent placing the calls.
    pub agent_id: Option<Uuid>,
    /// Human-readable campaign name.
    pub display_name: String,
    /// Lifecycle state.
    pub status: Option<CampaignStatus>,
    /// Contact list as a JSON array.
    pub contacts: Option<serde_json::Value>,
    /// Optional schedule definition.
    pub schedule: Option<serde_json::Value>,
}

/// Data for updating a campaign.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateCampaign {
    /// Agent placing the calls.
    pub agent_id: Option<Option<Uuid>>,
    /// Human-readable campaign name.
    pub display_name: Option<String>,
    /// Lifecycle state.
    pub status: Option<CampaignStatus>,
    /// Contact list as a JSON array.
    pub contacts: Option<serde_json::Value>,
    /// Optional schedule definition.
    pub schedule: Option<Option<serde_json::Value>>,
}

impl Campaign {
    /// Returns the number of contacts in the campaign.
    pub fn contact_count(&self) -> usize {
        self.contacts.as_array().map_or(0, Vec::len)
    }

    /// Returns whether the campaign has reached a terminal state.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
