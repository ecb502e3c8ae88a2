//! Struct emitter: turns ordered column metadata into a Go struct declaration.

use schemastruct_core::{ColumnMetadata, GenerationConfig, NullRepresentation};

use crate::naming::field_name;
use crate::typemap::map_type;

/// Fragment appended to the ORM tag of primary key columns.
pub const PRIMARY_KEY_MARKER: &str = ";primary_key";

/// Emit the `type <Name> struct { ... }` block for one table.
///
/// Fields follow the column order given; nothing is re-sorted. Columns with
/// an unknown SQL type get an empty type token so the gap is visible in the
/// generated code.
pub fn emit(columns: &[ColumnMetadata], config: &GenerationConfig) -> String {
    let mut out = format!("type {} struct {{", config.resolved_struct_name());
    for column in columns {
        out.push('\n');
        out.push_str(&render_field(column, config));
    }
    out.push_str("\n}");
    out
}

/// Render a single field line, without the leading line break.
pub fn render_field(column: &ColumnMetadata, config: &GenerationConfig) -> String {
    let representation = config.null_representation;
    let nullable = representation != NullRepresentation::Raw && column.is_nullable;
    let host_type = map_type(&column.sql_type, nullable, representation);
    let name = field_name(&column.name);

    let tags = field_tags(column, config);
    if tags.is_empty() {
        format!("{name} {host_type}")
    } else {
        format!(
            "{name} {host_type} `{}`  //{}",
            tags.join(" "),
            column.comment
        )
    }
}

/// Struct tags for a column, in ORM, JSON, custom order.
pub fn field_tags(column: &ColumnMetadata, config: &GenerationConfig) -> Vec<String> {
    let mut tags = Vec::new();
    if config.emit_orm_tag {
        let marker = if column.key_role.is_primary() {
            PRIMARY_KEY_MARKER
        } else {
            ""
        };
        tags.push(format!("gorm:\"column:{}{marker}\"", column.name));
    }
    if config.emit_json_tag {
        tags.push(format!("json:\"{}\"", column.name));
    }
    if let Some(key) = config.custom_tag() {
        tags.push(format!("{key}:\"{}\"", column.name));
    }
    tags
}
