//! List operation - schema entries and the classes they produce.

use ecsgen_codegen::GeneratorConfig;
use ecsgen_core::{PhpTypeMapper, to_pascal_case};
use ecsgen_schema::Schema;

use crate::reports::{ListEntry, ListReport};

/// Collect one entry per schema type, in schema order.
pub fn list(schema: &Schema, config: &GeneratorConfig) -> ListReport {
    let entries = schema
        .iter()
        .map(|(key, definition)| ListEntry {
            key: key.to_string(),
            file_name: config.file_name(&to_pascal_case(&definition.title), &PhpTypeMapper),
            field_count: definition.fields.len(),
        })
        .collect();

    ListReport { entries }
}
