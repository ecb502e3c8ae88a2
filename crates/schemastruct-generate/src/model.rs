/// Generated Go source for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStruct {
    pub table: String,
    /// Resolved Go type name.
    pub struct_name: String,
    /// Complete Go file contents.
    pub source: String,
    /// Columns whose SQL type has no Go mapping.
    pub unmapped: Vec<UnmappedColumn>,
}

/// A column emitted with an empty type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedColumn {
    pub column: String,
    pub sql_type: String,
}
