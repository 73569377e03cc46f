use std::fmt;
use std::time::{Duration, Instant};

use deadpool::Runtime;
use deadpool::managed::{Hook, QueueMode};
use derive_more::{Deref, DerefMut};
use diesel::QueryableByName;
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::scoped_futures::ScopedBoxFuture;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use serde::Serialize;

use crate::client::{ConnectionPool, PooledConnection, custom_hooks};
use crate::{PgConfig, PgError, PgResult, TRACING_TARGET_CLIENT};

/// Acquisitions slower than this are logged as contention warnings.
const SLOW_ACQUIRE_THRESHOLD: Duration = Duration::from_millis(500);

/// Asynchronous `PostgreSQL` client with managed connection pooling.
///
/// Cheap to clone, all clones share the same underlying pool.
#[derive(Clone)]
#[must_use = "clients do nothing unless you use them"]
pub struct PgClient {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Creates a new client with the provided configuration.
    ///
    /// Does not verify connectivity, see [`PgClient::new_with_test`].
    pub fn new(config: PgConfig) -> PgResult<Self> {
        config.validate()?;

        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(custom_hooks::setup_callback);

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_config(
            config.database_url.clone(),
            manager_config,
        );

        let mut builder = ConnectionPool::builder(manager)
            .max_size(config.max_connections as usize)
            .queue_mode(QueueMode::Fifo)
            .runtime(Runtime::Tokio1)
            .post_create(Hook::sync_fn(custom_hooks::post_create))
            .pre_recycle(Hook::sync_fn(custom_hooks::pre_recycle))
            .post_recycle(Hook::sync_fn(custom_hooks::post_recycle));

        if let Some(timeout) = config.connection_timeout() {
            builder = builder.create_timeout(Some(timeout));
            builder = builder.wait_timeout(Some(timeout));
        }

        if let Some(timeout) = config.idle_timeout() {
            builder = builder.recycle_timeout(Some(timeout));
        }

        let pool = builder
            .build()
            .map_err(|err| PgError::Config(err.to_string()))?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            url = %config.database_url_masked(),
            max_connections = config.max_connections,
            "Connection pool initialized"
        );

        Ok(Self { pool, config })
    }

    /// Creates a new client and verifies connectivity with a test query.
    pub async fn new_with_test(config: PgConfig) -> PgResult<Self> {
        let client = Self::new(config)?;
        client.test_connection().await?;
        Ok(client)
    }

    /// Runs a trivial query to confirm the database is reachable.
    pub async fn test_connection(&self) -> PgResult<()> {
        #[derive(QueryableByName)]
        struct ConnectivityCheck {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            result: i32,
        }

        let mut conn = self.get_connection().await?;
        let check: ConnectivityCheck = diesel::sql_query("SELECT 1 AS result")
            .get_result(&mut *conn)
            .await?;

        if check.result != 1 {
            return Err(PgError::Unexpected(
                "connectivity check returned an unexpected value".into(),
            ));
        }

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            url = %self.config.database_url_masked(),
            "Database connectivity verified"
        );

        Ok(())
    }

    /// Retrieves a connection from the pool.
    pub async fn get_connection(&self) -> PgResult<PgConn> {
        let start = Instant::now();
        let conn = self.pool.get().await.map_err(PgError::from)?;
        let elapsed = start.elapsed();

        if elapsed > SLOW_ACQUIRE_THRESHOLD {
            let status = self.pool_status();
            tracing::warn!(
                target: TRACING_TARGET_CLIENT,
                elapsed_ms = elapsed.as_millis(),
                available = status.available,
                waiting = status.waiting,
                "Slow connection acquisition, pool may be under contention"
            );
        }

        Ok(PgConn { conn })
    }

    /// Retrieves a raw pooled connection, bypassing the [`PgConn`] wrapper.
    pub(crate) async fn get_pooled_connection(&self) -> PgResult<PooledConnection> {
        let conn = self.pool.get().await.map_err(PgError::from)?;
        Ok(conn)
    }

    /// Returns a snapshot of the current pool utilization.
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.pool.status();
        PgPoolStatus {
            size: status.size,
            available: status.available,
            waiting: status.waiting,
            max_size: status.max_size,
        }
    }

    /// Returns the configuration this client was built with.
    #[inline]
    pub fn config(&self) -> &PgConfig {
        &self.config
    }
}

impl fmt::Debug for PgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgClient")
            .field("url", &self.config.database_url_masked())
            .field("status", &self.pool_status())
            .finish_non_exhaustive()
    }
}

/// Point-in-time snapshot of pool utilization.
#[derive(Debug, Clone, Copy, Serialize)]
#[must_use = "snapshots do nothing unless you read them"]
pub struct PgPoolStatus {
    /// Current number of open connections.
    pub size: usize,
    /// Connections currently idle in the pool.
    pub available: usize,
    /// Tasks waiting for a connection.
    pub waiting: usize,
    /// Upper bound on open connections.
    pub max_size: usize,
}

/// Pooled database connection handle.
///
/// Dereferences to the underlying [`AsyncPgConnection`], so all [`diesel`]
/// query methods apply directly. The connection returns to the pool on drop.
#[derive(Deref, DerefMut)]
#[must_use = "connections do nothing unless you use them"]
pub struct PgConn {
    conn: PooledConnection,
}

impl PgConn {
    /// Executes the given closure inside of a database transaction.
    ///
    /// Commits if the closure returns `Ok`, rolls back on `Err`.
    pub async fn transaction<'a, T, E, F>(&mut self, callback: F) -> Result<T, E>
    where
        F: for<'r> FnOnce(&'r mut PooledConnection) -> ScopedBoxFuture<'a, 'r, Result<T, E>>
            + Send
            + 'a,
        T: Send + 'a,
        E: From<diesel::result::Error> + Send + 'a,
    {
        self.conn.transaction(callback).await
    }
}

impl fmt::Debug for PgConn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConn").finish_non_exhaustive()
    }
}
