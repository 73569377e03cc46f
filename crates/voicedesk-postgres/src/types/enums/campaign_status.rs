//! Campaign status enumeration for outbound calling campaigns.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the lifecycle state of an outbound calling campaign.
///
/// This enumeration corresponds to the `CAMPAIGN_STATUS` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[ExistingTypePath = "crate::schema::sql_types::CampaignStatus"]
pub enum CampaignStatus {
    /// Campaign is being prepared and has not been scheduled yet
    #[db_rename = "draft"]
    #[serde(rename = "draft")]
    #[default]
    Draft,

    /// Campaign is scheduled to run at a future point in time
    #[db_rename = "scheduled"]
    #[serde(rename = "scheduled")]
    Scheduled,

    /// Campaign is actively placing calls
    #[db_rename = "running"]
    #[serde(rename = "running")]
    Running,

    /// Campaign finished processing all of its contacts
    #[db_rename = "completed"]
    #[serde(rename = "completed")]
    Completed,

    /// Campaign was cancelled before completion
    #[db_rename = "cancelled"]
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl CampaignStatus {
    /// Returns whether the campaign has reached a terminal state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, CampaignStatus::Completed | CampaignStatus::Cancelled)
    }

    /// Returns whether the campaign may still be edited.
    #[inline]
    pub fn is_editable(self) -> bool {
        matches!(self, CampaignStatus::Draft | CampaignStatus::Scheduled)
    }
}
