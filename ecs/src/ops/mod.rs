//! Core operations.
//!
//! This module contains the business logic for ecsgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, generate};
pub use list::list;
