use std::time::Instant;

use tracing::{info, warn};

use schemastruct_core::{ColumnMetadata, GenerationConfig, NullRepresentation};
use schemastruct_introspect::Adapter;

use crate::emitter::emit;
use crate::errors::GenerationError;
use crate::model::{GeneratedStruct, UnmappedColumn};
use crate::render::render_file;
use crate::typemap::{map_type, TypeFamily};

/// Entry point for generating Go structs from live schema metadata.
#[derive(Debug, Clone)]
pub struct GenerationEngine<A> {
    adapter: A,
}

impl<A: Adapter> GenerationEngine<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Name of the database engine behind the adapter.
    pub fn engine_name(&self) -> &'static str {
        self.adapter.engine()
    }

    /// Generate the table named by `config.table_name`.
    pub async fn generate_table(
        &self,
        config: &GenerationConfig,
    ) -> Result<GeneratedStruct, GenerationError> {
        let columns = self
            .adapter
            .list_columns(&config.schema_name, &config.table_name)
            .await?;
        if columns.is_empty() {
            return Err(GenerationError::metadata_unavailable(format!(
                "no columns found for {}.{}",
                config.schema_name, config.table_name
            )));
        }
        Ok(generate_from_columns(&columns, config))
    }

    /// Generate every table of `config.schema_name`, in listed order.
    ///
    /// The first failure aborts the whole run; no partial result is returned.
    pub async fn generate_schema(
        &self,
        config: &GenerationConfig,
    ) -> Result<Vec<GeneratedStruct>, GenerationError> {
        let start = Instant::now();
        let tables = self.adapter.list_tables(&config.schema_name).await?;
        if tables.is_empty() {
            return Err(GenerationError::metadata_unavailable(format!(
                "no tables found in schema {}",
                config.schema_name
            )));
        }

        let mut generated = Vec::with_capacity(tables.len());
        for table in tables {
            info!(event = "table_started", engine = self.engine_name(), table = %table);
            generated.push(self.generate_table(&config.for_table(table)).await?);
        }

        info!(
            event = "schema_generated",
            engine = self.engine_name(),
            schema = %config.schema_name,
            tables = generated.len(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(generated)
    }
}

/// Emit and render one table from already retrieved columns.
pub fn generate_from_columns(
    columns: &[ColumnMetadata],
    config: &GenerationConfig,
) -> GeneratedStruct {
    let block = emit(columns, config);
    let representation = config.null_representation;
    let host_types = columns.iter().map(|column| {
        let nullable = representation != NullRepresentation::Raw && column.is_nullable;
        map_type(&column.sql_type, nullable, representation)
    });
    let source = render_file(&block, config, host_types);

    let unmapped: Vec<UnmappedColumn> = columns
        .iter()
        .filter(|column| TypeFamily::classify(&column.sql_type).is_none())
        .map(|column| UnmappedColumn {
            column: column.name.clone(),
            sql_type: column.sql_type.clone(),
        })
        .collect();
    for gap in &unmapped {
        warn!(
            event = "unmapped_type",
            table = %config.table_name,
            column = %gap.column,
            sql_type = %gap.sql_type
        );
    }

    GeneratedStruct {
        table: config.table_name.clone(),
        struct_name: config.resolved_struct_name().to_string(),
        source,
        unmapped,
    }
}
