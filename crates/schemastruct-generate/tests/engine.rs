use std::collections::BTreeMap;

use async_trait::async_trait;
use schemastruct_core::{ColumnMetadata, Error, GenerationConfig, Result};
use schemastruct_generate::{GenerationEngine, GenerationError};
use schemastruct_introspect::Adapter;

/// In-memory adapter keyed by table name, for a single schema.
struct FixtureAdapter {
    schema: String,
    tables: BTreeMap<String, Vec<ColumnMetadata>>,
    fail_on: Option<String>,
}

impl FixtureAdapter {
    fn shop() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            "orders".to_string(),
            vec![
                ColumnMetadata::new("id", "bigint").primary_key(),
                ColumnMetadata::new("user_id", "int"),
            ],
        );
        tables.insert(
            "users".to_string(),
            vec![
                ColumnMetadata::new("id", "int").primary_key(),
                ColumnMetadata::new("email", "varchar").nullable(),
            ],
        );
        Self {
            schema: "shop".to_string(),
            tables,
            fail_on: None,
        }
    }
}

#[async_trait]
impl Adapter for FixtureAdapter {
    fn engine(&self) -> &'static str {
        "fixture"
    }

    async fn list_tables(&self, schema: &str) -> Result<Vec<String>> {
        if schema != self.schema {
            return Ok(Vec::new());
        }
        Ok(self.tables.keys().cloned().collect())
    }

    async fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnMetadata>> {
        if self.fail_on.as_deref() == Some(table) {
            return Err(Error::MetadataUnavailable(format!(
                "connection lost reading {table}"
            )));
        }
        if schema != self.schema {
            return Ok(Vec::new());
        }
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

#[tokio::test]
async fn generates_single_table() {
    let engine = GenerationEngine::new(FixtureAdapter::shop());
    let config = GenerationConfig::new("shop", "users");

    let generated = engine.generate_table(&config).await.expect("generate users");

    assert_eq!(generated.table, "users");
    assert_eq!(generated.struct_name, "users");
    assert!(generated.source.starts_with("package shop\n"));
    assert!(generated.source.contains("Email string `json:\"email\"`  //"));
}

#[test]
fn reports_adapter_engine() {
    let engine = GenerationEngine::new(FixtureAdapter::shop());
    assert_eq!(engine.engine_name(), "fixture");
}

#[tokio::test]
async fn missing_table_is_metadata_unavailable() {
    let engine = GenerationEngine::new(FixtureAdapter::shop());
    let config = GenerationConfig::new("shop", "invoices");

    let err = engine
        .generate_table(&config)
        .await
        .expect_err("missing table must fail");

    assert!(matches!(
        err,
        GenerationError::Core(Error::MetadataUnavailable(_))
    ));
}

#[tokio::test]
async fn generates_every_table_in_listed_order() {
    let engine = GenerationEngine::new(FixtureAdapter::shop());
    let mut config = GenerationConfig::new("shop", "");
    config.emit_orm_tag = true;

    let generated = engine.generate_schema(&config).await.expect("generate schema");

    let tables: Vec<&str> = generated.iter().map(|item| item.table.as_str()).collect();
    assert_eq!(tables, vec!["orders", "users"]);
    assert!(generated[0].source.contains("return \"orders\""));
    assert!(generated[1].source.contains("func (u *users) TableName() string"));
}

#[tokio::test]
async fn empty_schema_is_metadata_unavailable() {
    let engine = GenerationEngine::new(FixtureAdapter::shop());
    let config = GenerationConfig::new("warehouse", "");

    let err = engine
        .generate_schema(&config)
        .await
        .expect_err("empty schema must fail");

    assert!(matches!(
        err,
        GenerationError::Core(Error::MetadataUnavailable(_))
    ));
}

#[tokio::test]
async fn upstream_failure_aborts_without_partial_output() {
    let mut adapter = FixtureAdapter::shop();
    adapter.fail_on = Some("users".to_string());
    let engine = GenerationEngine::new(adapter);

    let result = engine.generate_schema(&GenerationConfig::new("shop", "")).await;

    match result {
        Err(GenerationError::Core(Error::MetadataUnavailable(message))) => {
            assert!(message.contains("connection lost reading users"));
        }
        other => panic!("expected metadata unavailable, got {other:?}"),
    }
}
