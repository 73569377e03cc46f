//! Campaign repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{Campaign, NewCampaign, UpdateCampaign};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for campaign database operations.
pub trait CampaignRepository {
    /// Creates a new campaign.
    fn create_campaign(
        &mut self,
        campaign: NewCampaign,
    ) -> impl Future<Output = PgResult<Campaign>> + Send;

    /// Finds a campaign by ID within one tenant.
    fn find_campaign_by_id(
        &mut self,
        campaign_id: Uuid,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Campaign>>> + Send;

    /// Updates a campaign within one tenant.
    fn update_campaign(
        &mut self,
        campaign_id: Uuid,
        tenant_id: Uuid,
        changes: UpdateCampaign,
    ) -> impl Future<Output = PgResult<Campaign>> + Send;

    /// Lists campaigns of one tenant ordered by creation time.
    fn list_campaigns(
        &mut self,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Campaign>>> + Send;

    /// Counts campaigns of one tenant.
    fn count_campaigns(&mut self, tenant_id: Uuid) -> impl Future<Output = PgResult<i64>> + Send;
}

impl CampaignRepository for PgConnection {
    async fn create_campaign(&mut self, campaign: NewCampaign) -> PgResult<Campaign> {
        use schema::campaigns;

        let campaign = diesel::insert_into(campaigns::table)
            .values(&campaign)
            .returning(Campaign::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(campaign)
    }

    async fn find_campaign_by_id(
        &mut self,
        campaign_id: Uuid,
        owner_id: Uuid,
    ) -> PgResult<Option<Campaign>> {
        use schema::campaigns::dsl::*;

        campaigns
            .filter(id.eq(campaign_id))
            .filter(tenant_id.eq(owner_id))
            .select(Campaign::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_campaign(
        &mut self,
        campaign_id: Uuid,
        owner_id: Uuid,
        changes: UpdateCampaign,
    ) -> PgResult<Campaign> {
        use schema::campaigns::dsl::*;

        let campaign = diesel::update(campaigns)
            .filter(id.eq(campaign_id))
            .filter(tenant_id.eq(owner_id))
            .set(&changes)
            .returning(Campaign::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(campaign)
    }

    async fn list_campaigns(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Campaign>> {
        use schema::campaigns::dsl::*;

        campaigns
            .filter(tenant_id.eq(owner_id))
            .select(Campaign::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_campaigns(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::campaigns::dsl::*;

        campaigns
            .filter(tenant_id.eq(owner_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
