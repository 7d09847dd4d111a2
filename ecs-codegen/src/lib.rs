//! Class generation for ECS schemas.
//!
//! This crate turns a loaded [`Schema`](ecsgen_schema::Schema) into one
//! rendered source file per type definition.
//!
//! # Module Organization
//!
//! - [`config`] - Paths and constants that drive a run
//! - [`descriptor`] - Render-ready field descriptors
//! - [`context`] - Per-class template context
//! - [`renderer`] - Template environment
//! - [`generator`] - Orchestration: render and write every class

pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod renderer;

pub use config::GeneratorConfig;
pub use context::ClassContext;
pub use descriptor::{MethodField, method_fields};
pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator, PreviewFile, WrittenFile, run};
pub use renderer::Renderer;
