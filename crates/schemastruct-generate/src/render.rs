//! Wraps an emitted struct block into a complete Go source file.

use std::collections::BTreeSet;

use schemastruct_core::GenerationConfig;

use crate::typemap::import_path;

/// Build the Go source file for one table.
///
/// `host_types` are the Go types used by the struct's fields; they decide
/// which packages are imported.
pub fn render_file<'a>(
    block: &str,
    config: &GenerationConfig,
    host_types: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut out = format!("package {}\n\n", config.resolved_package_name());

    let imports = render_imports(host_types);
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push('\n');
    }

    out.push_str(block);
    out.push('\n');

    if config.emit_orm_tag {
        out.push('\n');
        out.push_str(&table_name_method(config));
    }
    out
}

fn render_imports<'a>(host_types: impl IntoIterator<Item = &'a str>) -> String {
    let paths: BTreeSet<&'static str> = host_types.into_iter().filter_map(import_path).collect();
    if paths.is_empty() {
        return String::new();
    }

    // Standard library first, then third-party packages after a blank line.
    let (third_party, std_lib): (Vec<&str>, Vec<&str>) =
        paths.into_iter().partition(|path| path.contains('.'));

    let mut out = String::from("import (\n");
    for path in &std_lib {
        out.push_str(&format!("\t\"{path}\"\n"));
    }
    if !std_lib.is_empty() && !third_party.is_empty() {
        out.push('\n');
    }
    for path in &third_party {
        out.push_str(&format!("\t\"{path}\"\n"));
    }
    out.push_str(")\n");
    out
}

/// GORM `TableName()` method binding the struct to its table.
fn table_name_method(config: &GenerationConfig) -> String {
    let struct_name = config.resolved_struct_name();
    let receiver = struct_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect::<String>())
        .unwrap_or_else(|| "t".to_string());
    format!(
        "// TableName sets the insert table name for this struct type\n\
         func ({receiver} *{struct_name}) TableName() string {{\n\
         \treturn \"{}\"\n\
         }}\n",
        config.table_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_import_block_when_unneeded() {
        let config = GenerationConfig::new("shop", "orders");
        let file = render_file("type orders struct {\n}", &config, ["int", "[]byte"]);
        assert_eq!(file, "package shop\n\ntype orders struct {\n}\n");
    }

    #[test]
    fn groups_standard_and_third_party_imports() {
        let imports = render_imports(["null.String", "time.Time", "sql.NullInt64", "null.Int"]);
        assert_eq!(
            imports,
            "import (\n\t\"database/sql\"\n\t\"time\"\n\n\t\"gopkg.in/guregu/null.v3\"\n)\n"
        );
    }

    #[test]
    fn appends_table_name_method_for_orm_tags() {
        let mut config = GenerationConfig::new("shop", "orders");
        config.emit_orm_tag = true;
        config.struct_name = "Order".to_string();
        let file = render_file("type Order struct {\n}", &config, std::iter::empty());
        assert!(file.ends_with(
            "// TableName sets the insert table name for this struct type\n\
             func (o *Order) TableName() string {\n\
             \treturn \"orders\"\n\
             }\n"
        ));
    }
}
