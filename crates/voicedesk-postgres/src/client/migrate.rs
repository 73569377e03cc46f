//! Embedded migration runner.
//!
//! Migrations are compiled into the binary via [`embed_migrations!`] and
//! applied at startup, no external `diesel` CLI invocation is required.
//!
//! [`embed_migrations!`]: diesel_migrations::embed_migrations

use std::time::{Duration, Instant};

use diesel::sql_types::Text;
use diesel::{QueryableByName, sql_query};
use diesel_async::RunQueryDsl;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgConn, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Summary of a completed migration run.
#[derive(Debug, Clone)]
#[must_use = "outcomes do nothing unless you read them"]
pub struct MigrationOutcome {
    /// Versions applied during this run, in order.
    pub applied: Vec<String>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl MigrationOutcome {
    /// Returns `true` if the schema was already up to date.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Applies all pending embedded migrations.
///
/// The harness runs blocking `diesel` code, so the connection is moved onto
/// a dedicated thread for the duration of the run.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationOutcome> {
    let start = Instant::now();
    let conn = pg.get_pooled_connection().await?;
    let mut conn: AsyncConnectionWrapper<_> = conn.into();

    let results = spawn_blocking(move || match conn.run_pending_migrations(MIGRATIONS) {
        Ok(versions) => Ok(versions
            .into_iter()
            .map(|version| version.to_string())
            .collect::<Vec<_>>()),
        Err(err) => Err(err),
    })
    .await;

    let elapsed = start.elapsed();
    let applied = results
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                elapsed = ?elapsed,
                error = %err,
                "Migration task panicked"
            );

            PgError::Migration(err.into())
        })?
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                elapsed = ?elapsed,
                error = &err,
                "Migration run failed"
            );

            PgError::Migration(err)
        })?;

    if applied.is_empty() {
        tracing::debug!(
            target: TRACING_TARGET_MIGRATION,
            elapsed = ?elapsed,
            "Database schema is already up to date"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            elapsed = ?elapsed,
            migrations = applied.len(),
            "Applied pending migrations"
        );
    }

    Ok(MigrationOutcome { applied, elapsed })
}

/// Lists all migration versions recorded in the schema migrations table.
pub async fn applied_migrations(conn: &mut PgConn) -> PgResult<Vec<String>> {
    #[derive(QueryableByName)]
    struct AppliedVersion {
        #[diesel(sql_type = Text)]
        version: String,
    }

    let rows: Vec<AppliedVersion> =
        sql_query("SELECT version FROM __diesel_schema_migrations ORDER BY version")
            .load(&mut **conn)
            .await?;

    Ok(rows.into_iter().map(|row| row.version).collect())
}
