use async_trait::async_trait;

use schemastruct_core::{ColumnMetadata, Result};

/// Trait implemented by database adapters that can describe table columns.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Returns the engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// List the tables of a schema, ordered by name.
    async fn list_tables(&self, schema: &str) -> Result<Vec<String>>;

    /// List the columns of a table in declared ordinal order.
    async fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnMetadata>>;
}
