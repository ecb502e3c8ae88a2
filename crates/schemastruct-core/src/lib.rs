//! Core contracts for schemastruct.
//!
//! This crate defines the column metadata consumed by the code generator, the
//! immutable generation config, and helpers shared by the introspection
//! adapter and the CLI.

pub mod config;
pub mod error;
pub mod model;
pub mod redaction;

pub use config::{GenerationConfig, NullRepresentation};
pub use error::{Error, Result};
pub use model::{parse_is_nullable, ColumnMetadata, KeyRole};
pub use redaction::{redact_connection_string, RedactedConnection};
