use sqlx::MySqlPool;

use schemastruct_core::{Error, Result};

// String columns are cast to CHAR: depending on server version and collation,
// information_schema returns them as VARBINARY or ENUM.
const LIST_TABLES: &str = r#"
    SELECT
        CAST(TABLE_NAME AS CHAR(255)) AS table_name,
        CAST(TABLE_TYPE AS CHAR(64)) AS table_type
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ?
    ORDER BY TABLE_NAME
"#;

const LIST_COLUMNS: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR(255)) AS column_name,
        CAST(COLUMN_KEY AS CHAR(16)) AS column_key,
        CAST(DATA_TYPE AS CHAR(64)) AS data_type,
        CAST(IS_NULLABLE AS CHAR(3)) AS is_nullable,
        CAST(COLUMN_COMMENT AS CHAR) AS column_comment
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION ASC
"#;

/// Fold a driver failure into [`Error::MetadataUnavailable`], keeping its message.
pub(super) fn metadata_error(context: &str, err: sqlx::Error) -> Error {
    Error::MetadataUnavailable(format!("{context}: {err}"))
}

pub struct RawTable {
    pub name: String,
    pub table_type: String,
}

pub async fn list_tables(pool: &MySqlPool, schema: &str) -> Result<Vec<RawTable>> {
    let rows = sqlx::query_as::<_, (String, String)>(LIST_TABLES)
        .bind(schema)
        .fetch_all(pool)
        .await
        .map_err(|err| metadata_error(&format!("listing tables of {schema}"), err))?;

    Ok(rows
        .into_iter()
        .map(|(name, table_type)| RawTable { name, table_type })
        .collect())
}

pub struct RawColumn {
    pub name: String,
    pub column_key: String,
    pub data_type: String,
    pub is_nullable: String,
    pub comment: Option<String>,
}

pub async fn list_columns(pool: &MySqlPool, schema: &str, table: &str) -> Result<Vec<RawColumn>> {
    let rows = sqlx::query_as::<_, (String, String, String, String, Option<String>)>(LIST_COLUMNS)
        .bind(schema)
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(|err| metadata_error(&format!("listing columns of {schema}.{table}"), err))?;

    Ok(rows
        .into_iter()
        .map(|(name, column_key, data_type, is_nullable, comment)| RawColumn {
            name,
            column_key,
            data_type,
            is_nullable,
            comment,
        })
        .collect())
}
