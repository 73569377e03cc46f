//! Agent repository for locally cached provider agents.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{Agent, NewAgent, UpdateAgent};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for agent database operations.
pub trait AgentRepository {
    /// Creates a new agent row.
    fn create_agent(&mut self, agent: NewAgent) -> impl Future<Output = PgResult<Agent>> + Send;

    /// Finds an agent by ID within one tenant.
    fn find_agent_by_id(
        &mut self,
        agent_id: Uuid,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Agent>>> + Send;

    /// Finds an agent by its provider agent id, across tenants.
    ///
    /// Webhook payloads carry only the provider id, so this lookup cannot
    /// be tenant-scoped.
    fn find_agent_by_bolna_id(
        &mut self,
        bolna_agent_id: &str,
    ) -> impl Future<Output = PgResult<Option<Agent>>> + Send;

    /// Updates an agent within one tenant.
    fn update_agent(
        &mut self,
        agent_id: Uuid,
        tenant_id: Uuid,
        changes: UpdateAgent,
    ) -> impl Future<Output = PgResult<Agent>> + Send;

    /// Deletes an agent within one tenant. Returns whether a row was removed.
    fn delete_agent(
        &mut self,
        agent_id: Uuid,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<bool>> + Send;

    /// Lists agents of one tenant ordered by creation time.
    fn list_agents(
        &mut self,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Agent>>> + Send;

    /// Loads every agent of one tenant, unpaginated.
    ///
    /// Used by the sync service which must walk the complete set.
    fn all_agents(&mut self, tenant_id: Uuid) -> impl Future<Output = PgResult<Vec<Agent>>> + Send;

    /// Counts agents of one tenant.
    fn count_agents(&mut self, tenant_id: Uuid) -> impl Future<Output = PgResult<i64>> + Send;

    /// Deletes agents of one tenant whose provider id is not in `upstream_ids`.
    ///
    /// An empty `upstream_ids` deletes every agent of the tenant. Returns
    /// the number of deleted rows.
    fn delete_agents_missing_from(
        &mut self,
        tenant_id: Uuid,
        upstream_ids: &[String],
    ) -> impl Future<Output = PgResult<u64>> + Send;
}

impl AgentRepository for PgConnection {
    async fn create_agent(&mut self, agent: NewAgent) -> PgResult<Agent> {
        use schema::agents;

        let agent = diesel::insert_into(agents::table)
            .values(&agent)
            .returning(Agent::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(agent)
    }

    async fn find_agent_by_id(&mut self, agent_id: Uuid, owner_id: Uuid) -> PgResult<Option<Agent>> {
        use schema::agents::dsl::*;

        agents
            .filter(id.eq(agent_id))
            .filter(tenant_id.eq(owner_id))
            .select(Agent::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn find_agent_by_bolna_id(&mut self, provider_id: &str) -> PgResult<Option<Agent>> {
        use schema::agents::dsl::*;

        agents
            .filter(bolna_agent_id.eq(provider_id))
            .select(Agent::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn update_agent(
        &mut self,
        agent_id: Uuid,
        owner_id: Uuid,
        changes: UpdateAgent,
    ) -> PgResult<Agent> {
        use schema::agents::dsl::*;

        let agent = diesel::update(agents)
            .filter(id.eq(agent_id))
            .filter(tenant_id.eq(owner_id))
            .set(&changes)
            .returning(Agent::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(agent)
    }

    async fn delete_agent(&mut self, agent_id: Uuid, owner_id: Uuid) -> PgResult<bool> {
        use schema::agents::dsl::*;

        let deleted = diesel::delete(agents)
            .filter(id.eq(agent_id))
            .filter(tenant_id.eq(owner_id))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }

    async fn list_agents(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Agent>> {
        use schema::agents::dsl::*;

        agents
            .filter(tenant_id.eq(owner_id))
            .select(Agent::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn all_agents(&mut self, owner_id: Uuid) -> PgResult<Vec<Agent>> {
        use schema::agents::dsl::*;

        agents
            .filter(tenant_id.eq(owner_id))
            .select(Agent::as_select())
            .order(created_at.asc())
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_agents(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::agents::dsl::*;

        agents
            .filter(tenant_id.eq(owner_id))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }

    async fn delete_agents_missing_from(
        &mut self,
        owner_id: Uuid,
        upstream_ids: &[String],
    ) -> PgResult<u64> {
        use schema::agents::dsl::*;

        let deleted = diesel::delete(agents)
            .filter(tenant_id.eq(owner_id))
            .filter(bolna_agent_id.ne_all(upstream_ids))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted as u64)
    }
}
