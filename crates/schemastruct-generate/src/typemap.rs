//! SQL type to Go type mapping.

use schemastruct_core::NullRepresentation;

/// Returned by [`map_type`] for SQL types with no mapping.
pub const UNMAPPED: &str = "";

/// Group of SQL types sharing the same Go representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Int,
    BigInt,
    Text,
    Time,
    Decimal,
    Float,
    Binary,
}

/// Go type names for one family, by nullability and representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostTypes {
    pub plain: &'static str,
    pub standard: &'static str,
    pub third_party: &'static str,
}

const SQL_TYPES: &[(TypeFamily, &[&str])] = &[
    (TypeFamily::Int, &["tinyint", "int", "smallint", "mediumint"]),
    (TypeFamily::BigInt, &["bigint"]),
    (
        TypeFamily::Text,
        &["char", "enum", "varchar", "longtext", "mediumtext", "text", "tinytext", "json"],
    ),
    (TypeFamily::Time, &["date", "datetime", "time", "timestamp"]),
    (TypeFamily::Decimal, &["decimal", "double"]),
    (TypeFamily::Float, &["float"]),
    (
        TypeFamily::Binary,
        &["binary", "blob", "longblob", "mediumblob", "varbinary"],
    ),
];

impl TypeFamily {
    pub const ALL: [TypeFamily; 7] = [
        TypeFamily::Int,
        TypeFamily::BigInt,
        TypeFamily::Text,
        TypeFamily::Time,
        TypeFamily::Decimal,
        TypeFamily::Float,
        TypeFamily::Binary,
    ];

    /// Classify a raw SQL type name, ignoring case.
    pub fn classify(sql_type: &str) -> Option<Self> {
        let sql_type = sql_type.trim();
        SQL_TYPES
            .iter()
            .find(|(_, names)| names.iter().any(|name| name.eq_ignore_ascii_case(sql_type)))
            .map(|(family, _)| *family)
    }

    /// SQL type names belonging to this family.
    pub fn sql_types(self) -> &'static [&'static str] {
        SQL_TYPES
            .iter()
            .find(|(family, _)| *family == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    pub fn host_types(self) -> HostTypes {
        match self {
            TypeFamily::Int => HostTypes {
                plain: "int",
                standard: "sql.NullInt64",
                third_party: "null.Int",
            },
            TypeFamily::BigInt => HostTypes {
                plain: "int64",
                standard: "sql.NullInt64",
                third_party: "null.Int",
            },
            TypeFamily::Text => HostTypes {
                plain: "string",
                standard: "sql.NullString",
                third_party: "null.String",
            },
            // database/sql has no time wrapper in the Go versions this targets.
            TypeFamily::Time => HostTypes {
                plain: "time.Time",
                standard: "time.Time",
                third_party: "null.Time",
            },
            TypeFamily::Decimal => HostTypes {
                plain: "float64",
                standard: "sql.NullFloat64",
                third_party: "null.Float",
            },
            TypeFamily::Float => HostTypes {
                plain: "float32",
                standard: "sql.NullFloat64",
                third_party: "null.Float",
            },
            TypeFamily::Binary => HostTypes {
                plain: "[]byte",
                standard: "[]byte",
                third_party: "[]byte",
            },
        }
    }
}

impl HostTypes {
    pub fn select(&self, nullable: bool, representation: NullRepresentation) -> &'static str {
        if !nullable {
            return self.plain;
        }
        match representation {
            NullRepresentation::Raw => self.plain,
            NullRepresentation::Standard => self.standard,
            NullRepresentation::ThirdParty => self.third_party,
        }
    }
}

/// Map a SQL type to its Go type name.
///
/// Unknown types yield [`UNMAPPED`] rather than an error; whether that is
/// fatal is up to the caller.
pub fn map_type(sql_type: &str, nullable: bool, representation: NullRepresentation) -> &'static str {
    match TypeFamily::classify(sql_type) {
        Some(family) => family.host_types().select(nullable, representation),
        None => UNMAPPED,
    }
}

/// Go import path needed to use a host type, if any.
pub fn import_path(host_type: &str) -> Option<&'static str> {
    match host_type.split_once('.').map(|(package, _)| package) {
        Some("sql") => Some("database/sql"),
        Some("time") => Some("time"),
        Some("null") => Some("gopkg.in/guregu/null.v3"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPRESENTATIONS: [NullRepresentation; 3] = [
        NullRepresentation::Raw,
        NullRepresentation::Standard,
        NullRepresentation::ThirdParty,
    ];

    #[test]
    fn every_known_type_maps_to_a_host_type() {
        for family in TypeFamily::ALL {
            for sql_type in family.sql_types() {
                for representation in REPRESENTATIONS {
                    for nullable in [false, true] {
                        assert!(
                            !map_type(sql_type, nullable, representation).is_empty(),
                            "{sql_type} nullable={nullable} {representation:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_types_are_unmapped() {
        for sql_type in ["geometry", "point", "bit", "", "varchar2"] {
            for representation in REPRESENTATIONS {
                assert_eq!(map_type(sql_type, true, representation), UNMAPPED);
                assert_eq!(map_type(sql_type, false, representation), UNMAPPED);
            }
        }
    }

    #[test]
    fn raw_representation_ignores_nullability() {
        for family in TypeFamily::ALL {
            for sql_type in family.sql_types() {
                assert_eq!(
                    map_type(sql_type, true, NullRepresentation::Raw),
                    map_type(sql_type, false, NullRepresentation::Raw)
                );
            }
        }
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(map_type("VARCHAR", false, NullRepresentation::Raw), "string");
        assert_eq!(map_type("BigInt", false, NullRepresentation::Raw), "int64");
    }

    #[test]
    fn nullable_columns_use_wrappers() {
        use NullRepresentation::{Standard, ThirdParty};

        assert_eq!(map_type("int", true, Standard), "sql.NullInt64");
        assert_eq!(map_type("bigint", true, ThirdParty), "null.Int");
        assert_eq!(map_type("text", true, Standard), "sql.NullString");
        assert_eq!(map_type("json", true, ThirdParty), "null.String");
        assert_eq!(map_type("datetime", true, Standard), "time.Time");
        assert_eq!(map_type("timestamp", true, ThirdParty), "null.Time");
        assert_eq!(map_type("decimal", true, Standard), "sql.NullFloat64");
        assert_eq!(map_type("float", true, ThirdParty), "null.Float");
        assert_eq!(map_type("blob", true, ThirdParty), "[]byte");
    }

    #[test]
    fn non_nullable_columns_use_plain_types() {
        use NullRepresentation::ThirdParty;

        assert_eq!(map_type("smallint", false, ThirdParty), "int");
        assert_eq!(map_type("bigint", false, ThirdParty), "int64");
        assert_eq!(map_type("double", false, ThirdParty), "float64");
        assert_eq!(map_type("float", false, ThirdParty), "float32");
        assert_eq!(map_type("date", false, ThirdParty), "time.Time");
    }

    #[test]
    fn resolves_import_paths() {
        assert_eq!(import_path("sql.NullString"), Some("database/sql"));
        assert_eq!(import_path("time.Time"), Some("time"));
        assert_eq!(import_path("null.Int"), Some("gopkg.in/guregu/null.v3"));
        assert_eq!(import_path("[]byte"), None);
        assert_eq!(import_path("int"), None);
        assert_eq!(import_path(""), None);
    }
}
