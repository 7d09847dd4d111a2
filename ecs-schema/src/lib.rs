//! Schema types and loading for ECS nested YAML exports.
//!
//! The schema is an ordered mapping from a type key (e.g. `host`) to a
//! [`TypeDefinition`], each carrying the dotted field paths of that type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
pub use parse::parse_schema;
pub use schema::{FieldDefinition, Schema, TypeDefinition};
