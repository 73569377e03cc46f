//! Campaign response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use voicedesk_postgres::model;
use voicedesk_postgres::types::CampaignStatus;

/// Campaign response.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// ID of the campaign.
    pub campaign_id: Uuid,
    /// Tenant owning this campaign.
    pub tenant_id: Uuid,
    /// Agent placing the calls, if assigned.
    pub agent_id: Option<Uuid>,
    /// Human-readable campaign name.
    pub display_name: String,
    /// Lifecycle state.
    pub status: CampaignStatus,
    /// Number of contacts in the campaign.
    pub contact_count: usize,
    /// Contact list as a JSON array.
    pub contacts: serde_json::Value,
    /// Optional schedule definition.
    pub schedule: Option<serde_json::Value>,
    /// Timestamp when the campaign was created.
    pub created_at: Timestamp,
    /// Timestamp when the campaign was last updated.
    pub updated_at: Timestamp,
}

impl Campaign {
    /// Creates a new instance of [`Campaign`].
    pub fn from_model(campaign: model::Campaign) -> Self {
        let contact_count = campaign.contact_count();
        Self {
            campaign_id: campaign.id,
            tenant_id: campaign.tenant_id,
            agent_id: campaign.agent_id,
            display_name: campaign.display_name,
            status: campaign.status,
            contact_count,
            contacts: campaign.contacts,
            schedule: campaign.schedule,
            created_at: campaign.created_at.into(),
            updated_at: campaign.updated_at.into(),
        }
    }
}

/// Response for listing campaigns.
pub type Campaigns = Vec<Campaign>;
