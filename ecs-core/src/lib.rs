//! Core utilities and types for the ecsgen generator.
//!
//! This crate provides the string transforms, type mapping and file
//! writing shared by the rest of the ecsgen workspace.

mod file;
mod type_mapper;
mod utils;

// File operations
pub use file::File;
// Type mapping
pub use type_mapper::{PhpTypeMapper, TypeMapper};
// String utilities
pub use utils::{to_accessor_path, to_pascal_case};
