use serde::{Deserialize, Serialize};

/// Which type family nullable columns map to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NullRepresentation {
    /// Nullable columns use the plain host type.
    #[default]
    Raw,
    /// `database/sql` wrappers (`sql.NullString`, ...).
    Standard,
    /// `gopkg.in/guregu/null.v3` wrappers (`null.String`, ...).
    ThirdParty,
}

/// Settings for generating one table's type definition.
///
/// Built once per invocation and passed by reference; nothing in the
/// generator mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Schema (database) the table belongs to.
    pub schema_name: String,
    pub table_name: String,
    /// Generated type name; empty means "use the table name".
    pub struct_name: String,
    /// Generated package name; empty means "use the schema name".
    pub package_name: String,
    pub emit_json_tag: bool,
    pub emit_orm_tag: bool,
    /// Extra tag key emitted with the raw column name as value.
    pub custom_tag_key: Option<String>,
    pub null_representation: NullRepresentation,
}

impl GenerationConfig {
    pub fn new(schema_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            table_name: table_name.into(),
            struct_name: String::new(),
            package_name: String::new(),
            emit_json_tag: true,
            emit_orm_tag: false,
            custom_tag_key: None,
            null_representation: NullRepresentation::Raw,
        }
    }

    /// Same settings, targeting another table of the same schema.
    pub fn for_table(&self, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..self.clone()
        }
    }

    pub fn resolved_struct_name(&self) -> &str {
        if self.struct_name.is_empty() {
            &self.table_name
        } else {
            &self.struct_name
        }
    }

    pub fn resolved_package_name(&self) -> &str {
        if self.package_name.is_empty() {
            &self.schema_name
        } else {
            &self.package_name
        }
    }

    /// The custom tag key, if one is set and non-empty.
    pub fn custom_tag(&self) -> Option<&str> {
        self.custom_tag_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }
}
