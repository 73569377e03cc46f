//! Call execution repository.
//!
//! Executions are keyed by the provider's execution id. The webhook path
//! overwrites call artifacts on conflict, the sync path only fills gaps.

use std::future::Future;

use diesel::dsl::{now, sql};
use diesel::prelude::*;
use diesel::sql_types::Timestamptz;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{CallExecution, NewCallExecution};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for call execution database operations.
pub trait CallExecutionRepository {
    /// Inserts an execution, updating call artifacts when the provider id
    /// already exists.
    ///
    /// Transcript, recording URL and duration are overwritten with the
    /// incoming values on conflict.
    fn upsert_execution(
        &mut self,
        execution: NewCallExecution,
    ) -> impl Future<Output = PgResult<CallExecution>> + Send;

    /// Inserts an execution unless the provider id is already present.
    ///
    /// Returns `None` when a row with this provider id already existed.
    fn insert_execution_if_missing(
        &mut self,
        execution: NewCallExecution,
    ) -> impl Future<Output = PgResult<Option<CallExecution>>> + Send;

    /// Lists executions of one tenant, most recent first.
    fn list_executions(
        &mut self,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<CallExecution>>> + Send;

    /// Lists executions of one agent within one tenant, most recent first.
    fn list_executions_for_agent(
        &mut self,
        agent_id: Uuid,
        tenant_id: Uuid,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<CallExecution>>> + Send;

    /// Counts executions of one tenant created in the current calendar
    /// month, by the database clock.
    fn count_executions_this_month(
        &mut self,
        tenant_id: Uuid,
    ) -> impl Future<Output = PgResult<i64>> + Send;
}

impl CallExecutionRepository for PgConnection {
    async fn upsert_execution(&mut self, execution: NewCallExecution) -> PgResult<CallExecution> {
        use schema::call_executions::dsl::*;

        let execution = diesel::insert_into(call_executions)
            .values(&execution)
            .on_conflict(bolna_execution_id)
            .do_update()
            .set((
                transcript.eq(excluded(transcript)),
                recording_url.eq(excluded(recording_url)),
                duration_secs.eq(excluded(duration_secs)),
                updated_at.eq(now),
            ))
            .returning(CallExecution::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(execution)
    }

    async fn insert_execution_if_missing(
        &mut self,
        execution: NewCallExecution,
    ) -> PgResult<Option<CallExecution>> {
        use schema::call_executions::dsl::*;

        diesel::insert_into(call_executions)
            .values(&execution)
            .on_conflict(bolna_execution_id)
            .do_nothing()
            .returning(CallExecution::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn list_executions(
        &mut self,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<CallExecution>> {
        use schema::call_executions::dsl::*;

        call_executions
            .filter(tenant_id.eq(owner_id))
            .select(CallExecution::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn list_executions_for_agent(
        &mut self,
        call_agent_id: Uuid,
        owner_id: Uuid,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<CallExecution>> {
        use schema::call_executions::dsl::*;

        call_executions
            .filter(agent_id.eq(call_agent_id))
            .filter(tenant_id.eq(owner_id))
            .select(CallExecution::as_select())
            .order(created_at.desc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)
    }

    async fn count_executions_this_month(&mut self, owner_id: Uuid) -> PgResult<i64> {
        use schema::call_executions::dsl::*;

        call_executions
            .filter(tenant_id.eq(owner_id))
            .filter(created_at.ge(sql::<Timestamptz>("date_trunc('month', now())")))
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)
    }
}
