//! Campaign request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use voicedesk_postgres::model::NewCampaign;

/// Request payload for creating an outbound calling campaign.
///
/// Campaigns always start in the draft state; scheduling and launching are
/// separate lifecycle transitions.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    /// Display name of the campaign (1-100 characters).
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    /// Local agent that will place the calls.
    pub agent_id: Option<Uuid>,
    /// Contact list as a JSON array of contact objects.
    pub contacts: Option<serde_json::Value>,
    /// Schedule document, e.g. `{"startAt": "..."}`.
    pub schedule: Option<serde_json::Value>,
}

impl CreateCampaign {
    /// Converts this request into a [`NewCampaign`] scoped to the session
    /// tenant.
    pub fn into_model(self, tenant_id: Uuid) -> NewCampaign {
        NewCampaign {
            tenant_id,
            agent_id: self.agent_id,
            display_name: self.display_name,
            status: None,
            contacts: self.contacts,
            schedule: self.schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaigns_are_created_without_a_status_override() {
        let request = CreateCampaign {
            display_name: "Spring outreach".to_owned(),
            agent_id: None,
            contacts: Some(serde_json::json!([{"phone": "+14155550100"}])),
            schedule: None,
        };

        let model = request.into_model(Uuid::new_v4());
        assert!(model.status.is_none());
        assert!(model.contacts.is_some());
    }
}
