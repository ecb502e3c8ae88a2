use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::debug;

use schemastruct_core::{ColumnMetadata, Error, Result};

use crate::adapter::Adapter;
use crate::options::{ConnectOptions, IntrospectOptions};

mod mapper;
mod queries;

const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for MySQL and MariaDB, reading `information_schema`.
#[derive(Debug, Clone)]
pub struct MysqlAdapter {
    pool: MySqlPool,
    opts: IntrospectOptions,
}

impl MysqlAdapter {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(pool: MySqlPool, opts: IntrospectOptions) -> Self {
        Self { pool, opts }
    }

    /// Connect using discrete connection parameters.
    pub async fn connect(conn: &ConnectOptions, opts: IntrospectOptions) -> Result<Self> {
        let mut options = MySqlConnectOptions::new()
            .host(&conn.host)
            .port(conn.port)
            .username(&conn.user)
            .database(&conn.database);
        if let Some(password) = conn.password.as_deref() {
            options = options.password(password);
        }
        Self::connect_with(options, opts).await
    }

    /// Connect using a `mysql://` URL.
    pub async fn connect_url(url: &str, opts: IntrospectOptions) -> Result<Self> {
        let options = MySqlConnectOptions::from_str(url)
            .map_err(|err| Error::InvalidConfig(err.to_string()))?;
        Self::connect_with(options, opts).await
    }

    async fn connect_with(options: MySqlConnectOptions, opts: IntrospectOptions) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(opts.max_connections.max(1))
            .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|err| queries::metadata_error("connecting", err))?;
        debug!(event = "pool_connected", engine = "mysql");
        Ok(Self::new(pool, opts))
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Adapter for MysqlAdapter {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn list_tables(&self, schema: &str) -> Result<Vec<String>> {
        let raw = queries::list_tables(&self.pool, schema).await?;
        Ok(mapper::map_tables(raw, &self.opts))
    }

    async fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnMetadata>> {
        let raw = queries::list_columns(&self.pool, schema, table).await?;
        debug!(event = "columns_listed", schema, table, count = raw.len());
        Ok(mapper::map_columns(raw))
    }
}
