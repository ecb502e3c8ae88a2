use schemastruct_core::{parse_is_nullable, ColumnMetadata, KeyRole};

use crate::options::IntrospectOptions;

use super::queries::{RawColumn, RawTable};

pub fn map_tables(raw: Vec<RawTable>, opts: &IntrospectOptions) -> Vec<String> {
    raw.into_iter()
        .filter(|table| opts.include_views || table.table_type != "VIEW")
        .map(|table| table.name)
        .collect()
}

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<ColumnMetadata> {
    raw.into_iter()
        .map(|col| ColumnMetadata {
            name: col.name,
            sql_type: col.data_type.to_lowercase(),
            is_nullable: parse_is_nullable(&col.is_nullable),
            key_role: KeyRole::from_column_key(&col.column_key),
            comment: col.comment.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_column(name: &str, key: &str, data_type: &str, nullable: &str) -> RawColumn {
        RawColumn {
            name: name.to_string(),
            column_key: key.to_string(),
            data_type: data_type.to_string(),
            is_nullable: nullable.to_string(),
            comment: None,
        }
    }

    #[test]
    fn maps_columns_in_query_order() {
        let columns = map_columns(vec![
            raw_column("id", "PRI", "INT", "NO"),
            raw_column("email", "UNI", "varchar", "YES"),
            raw_column("created_at", "", "datetime", "NO"),
        ]);

        let names: Vec<&str> = columns.iter().map(|col| col.name.as_str()).collect();
        assert_eq!(names, vec!["id", "email", "created_at"]);
        assert_eq!(columns[0].key_role, KeyRole::Primary);
        assert_eq!(columns[0].sql_type, "int");
        assert!(!columns[0].is_nullable);
        assert_eq!(columns[1].key_role, KeyRole::None);
        assert!(columns[1].is_nullable);
        assert_eq!(columns[2].comment, "");
    }

    #[test]
    fn filters_views_when_disabled() {
        let raw = || {
            vec![
                RawTable {
                    name: "orders".to_string(),
                    table_type: "BASE TABLE".to_string(),
                },
                RawTable {
                    name: "order_totals".to_string(),
                    table_type: "VIEW".to_string(),
                },
            ]
        };

        let all = map_tables(raw(), &IntrospectOptions::default());
        assert_eq!(all, vec!["orders", "order_totals"]);

        let opts = IntrospectOptions {
            include_views: false,
            ..IntrospectOptions::default()
        };
        assert_eq!(map_tables(raw(), &opts), vec!["orders"]);
    }
}
