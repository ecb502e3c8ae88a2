use serde::{Deserialize, Serialize};

/// Role a column plays in the table's keys.
///
/// Only primary key membership affects generated code.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    Primary,
    #[default]
    None,
}

impl KeyRole {
    /// Parse the `COLUMN_KEY` value from `information_schema.columns`.
    pub fn from_column_key(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("PRI") {
            KeyRole::Primary
        } else {
            KeyRole::None
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, KeyRole::Primary)
    }
}

/// Parse the textual `IS_NULLABLE` indicator (`YES` / `NO`).
pub fn parse_is_nullable(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("YES")
}

/// Metadata for one table column, in declared ordinal order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Column name as declared in the schema.
    pub name: String,
    /// Raw vendor type name (e.g. `varchar`, `bigint`).
    pub sql_type: String,
    pub is_nullable: bool,
    pub key_role: KeyRole,
    /// Column comment, copied verbatim into generated annotations.
    pub comment: String,
}

impl ColumnMetadata {
    /// A non-nullable, non-key column without a comment.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            is_nullable: false,
            key_role: KeyRole::None,
            comment: String::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.key_role = KeyRole::Primary;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
