//! Go struct generation for schemastruct.
//!
//! The type mapper and struct emitter are pure functions over column
//! metadata; the engine wires them to an introspection [`Adapter`]
//! and renders complete Go files.
//!
//! [`Adapter`]: schemastruct_introspect::Adapter

pub mod emitter;
pub mod engine;
pub mod errors;
pub mod model;
pub mod naming;
pub mod render;
pub mod typemap;

pub use emitter::emit;
pub use engine::{generate_from_columns, GenerationEngine};
pub use errors::GenerationError;
pub use model::{GeneratedStruct, UnmappedColumn};
pub use naming::field_name;
pub use typemap::{map_type, TypeFamily};
