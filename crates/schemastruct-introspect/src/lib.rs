//! Database introspection adapters.

pub mod adapter;
pub mod mysql;
pub mod options;

pub use adapter::Adapter;
pub use mysql::MysqlAdapter;
pub use options::{ConnectOptions, IntrospectOptions};

pub use schemastruct_core::ColumnMetadata;
