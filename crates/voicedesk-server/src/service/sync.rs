//! Reconciliation between the local mirror and the upstream provider.
//!
//! The provider is the source of truth for agents, phone numbers and call
//! history. Sync deletes local rows whose upstream counterpart is gone and
//! backfills executions the webhook path missed.

use voicedesk_bolna::types::{AgentExecution, ExecutionFilters};
use voicedesk_bolna::BolnaClient;
use voicedesk_postgres::model::{Agent, NewCallExecution, Tenant};
use voicedesk_postgres::query::{
    AgentRepository, CallExecutionRepository, PhoneNumberRepository, TenantUserRepository,
};
use voicedesk_postgres::{PgClient, PgConn};

use crate::handler;
use crate::service::ProviderGateway;

/// Tracing target for sync operations.
const TRACING_TARGET: &str = "voicedesk_server::service::sync";

/// Page size used when walking upstream execution history.
const EXECUTION_PAGE_SIZE: usize = 100;

/// Counters reported by a completed tenant sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "reports do nothing unless you read them"]
pub struct SyncReport {
    /// Local agents deleted because they no longer exist upstream.
    pub deleted_agents: u64,
    /// Local phone numbers deleted because they no longer exist upstream.
    pub deleted_phone_numbers: u64,
    /// Local users removed by the stale-user purge.
    pub deleted_users: u64,
    /// Executions backfilled from upstream history.
    pub synced_executions: u64,
}

/// Reconciliation service aligning local rows with the provider.
///
/// Best-effort maintenance, not a transaction: each deletion is its own
/// statement, and a failing step aborts the sync without rolling back the
/// steps that already committed.
#[derive(Debug, Clone)]
pub struct SyncService {
    postgres: PgClient,
    provider: ProviderGateway,
    purge_test_users: bool,
}

impl SyncService {
    /// Creates a sync service.
    ///
    /// `purge_test_users` enables an environment-specific hygiene step that
    /// deletes inactive users and users whose email contains `test`. It is
    /// off in production deployments.
    pub fn new(postgres: PgClient, provider: ProviderGateway, purge_test_users: bool) -> Self {
        Self {
            postgres,
            provider,
            purge_test_users,
        }
    }

    /// Reconciles one tenant's local mirror against the provider.
    ///
    /// Deletes agents and phone numbers that disappeared upstream, optionally
    /// purges stale users, then backfills missing executions.
    #[tracing::instrument(skip_all, target = TRACING_TARGET, fields(tenant_id = %tenant.id))]
    pub async fn sync_tenant(&self, tenant: &Tenant) -> handler::Result<SyncReport> {
        let client = self.provider.for_tenant(tenant).await?;

        let upstream_agents = client.list_agents().await.map_err(handler::Error::from)?;
        let upstream_agent_ids: Vec<String> = upstream_agents
            .into_iter()
            .map(|agent| agent.agent_id)
            .collect();

        let mut conn = self.postgres.get_connection().await?;
        let deleted_agents = conn
            .delete_agents_missing_from(tenant.id, &upstream_agent_ids)
            .await?;

        let upstream_numbers = client
            .list_phone_numbers()
            .await
            .map_err(handler::Error::from)?;
        let upstream_phone_ids: Vec<String> = upstream_numbers
            .into_iter()
            .filter_map(|number| number.id)
            .collect();
        let deleted_phone_numbers = conn
            .delete_phones_missing_from(tenant.id, &upstream_phone_ids)
            .await?;

        let deleted_users = if self.purge_test_users {
            conn.purge_stale_users(tenant.id).await?
        } else {
            0
        };

        drop(conn);
        let synced_executions = self.sync_executions(tenant).await?;

        let report = SyncReport {
            deleted_agents,
            deleted_phone_numbers,
            deleted_users,
            synced_executions,
        };

        tracing::info!(
            target: TRACING_TARGET,
            deleted_agents = report.deleted_agents,
            deleted_phone_numbers = report.deleted_phone_numbers,
            deleted_users = report.deleted_users,
            synced_executions = report.synced_executions,
            "tenant sync completed"
        );

        Ok(report)
    }

    /// Backfills executions missing locally from upstream call history.
    ///
    /// Walks every local agent of the tenant; an agent whose history cannot
    /// be fetched is logged and skipped so one broken agent does not starve
    /// the rest. Returns the number of inserted rows.
    #[tracing::instrument(skip_all, target = TRACING_TARGET, fields(tenant_id = %tenant.id))]
    pub async fn sync_executions(&self, tenant: &Tenant) -> handler::Result<u64> {
        let client = self.provider.for_tenant(tenant).await?;

        let mut conn = self.postgres.get_connection().await?;
        let agents = conn.all_agents(tenant.id).await?;
        let filters = ExecutionFilters::default();

        let mut inserted = 0u64;
        for agent in agents {
            match Self::backfill_agent(&client, &mut conn, &agent, &filters).await {
                Ok(count) => inserted += count,
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        agent_id = %agent.bolna_agent_id,
                        error = %error,
                        "skipping agent whose execution history could not be synced"
                    );
                }
            }
        }

        Ok(inserted)
    }

    /// Pages through one agent's upstream execution history and inserts
    /// rows missing locally.
    async fn backfill_agent(
        client: &BolnaClient,
        conn: &mut PgConn,
        agent: &Agent,
        filters: &ExecutionFilters,
    ) -> handler::Result<u64> {
        let mut inserted = 0u64;
        let mut page_number = 1;

        loop {
            let page = client
                .list_agent_executions(
                    &agent.bolna_agent_id,
                    page_number,
                    EXECUTION_PAGE_SIZE,
                    filters,
                )
                .await
                .map_err(handler::Error::from)?;
            let is_last = page.is_last(EXECUTION_PAGE_SIZE);

            for execution in &page.data {
                let row = Self::execution_row(agent, execution);
                if conn.insert_execution_if_missing(row).await?.is_some() {
                    inserted += 1;
                }
            }

            if is_last {
                break;
            }
            page_number += 1;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            agent_id = %agent.bolna_agent_id,
            inserted,
            "agent execution history backfilled"
        );

        Ok(inserted)
    }

    /// Builds an insertable row from an upstream execution record.
    fn execution_row(agent: &Agent, execution: &AgentExecution) -> NewCallExecution {
        NewCallExecution {
            tenant_id: agent.tenant_id,
            agent_id: agent.id,
            bolna_execution_id: execution.id.clone(),
            transcript: execution.transcript.clone(),
            recording_url: execution.recording().map(str::to_owned),
            duration_secs: execution.duration_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn test_agent() -> Agent {
        let now = jiff::Timestamp::now();
        Agent {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            bolna_agent_id: "agent-upstream-1".to_owned(),
            agent_name: "Receptionist".to_owned(),
            status: "active".to_owned(),
            agent_config: serde_json::json!({}),
            agent_prompts: serde_json::json!({}),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn execution_row_copies_call_artifacts() {
        let agent = test_agent();
        let execution: AgentExecution = serde_json::from_str(
            r#"{
                "id": "exec-77",
                "transcript": "hello, thanks for calling",
                "conversation_duration": 12.4,
                "telephony_data": {"recording_url": "https://cdn.example.com/exec-77.mp3"}
            }"#,
        )
        .unwrap();

        let row = SyncService::execution_row(&agent, &execution);
        assert_eq!(row.tenant_id, agent.tenant_id);
        assert_eq!(row.agent_id, agent.id);
        assert_eq!(row.bolna_execution_id, "exec-77");
        assert_eq!(row.transcript.as_deref(), Some("hello, thanks for calling"));
        assert_eq!(
            row.recording_url.as_deref(),
            Some("https://cdn.example.com/exec-77.mp3")
        );
        assert_eq!(row.duration_secs, Some(12));
    }

    #[test]
    fn execution_row_tolerates_sparse_records() {
        let agent = test_agent();
        let execution: AgentExecution = serde_json::from_str(r#"{"id": "exec-bare"}"#).unwrap();

        let row = SyncService::execution_row(&agent, &execution);
        assert_eq!(row.bolna_execution_id, "exec-bare");
        assert!(row.transcript.is_none());
        assert!(row.recording_url.is_none());
        assert!(row.duration_secs.is_none());
    }
}
