//! Render-ready field descriptors.

use ecsgen_core::{TypeMapper, to_accessor_path, to_pascal_case};
use ecsgen_schema::FieldDefinition;
use indexmap::IndexMap;
use serde::Serialize;

/// One field of a generated class, as seen by the template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodField {
    /// PascalCase name used in accessor method names, e.g. "HostName"
    pub name: String,
    /// Bracketed accessor path, e.g. "host']['name"
    pub internal: String,
    /// Target language type, e.g. "string"
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
    /// Serialized as `none` when the schema has no example
    pub example: Option<serde_yaml::Value>,
}

impl MethodField {
    pub fn new(path: &str, field: &FieldDefinition, type_mapper: &dyn TypeMapper) -> Self {
        Self {
            name: to_pascal_case(path),
            internal: to_accessor_path(path),
            field_type: type_mapper.map_type(&field.field_type),
            description: field.description.clone(),
            example: field.example.clone(),
        }
    }
}

/// Build descriptors for every field, keeping the schema order.
pub fn method_fields(
    fields: &IndexMap<String, FieldDefinition>,
    type_mapper: &dyn TypeMapper,
) -> Vec<MethodField> {
    fields
        .iter()
        .map(|(path, field)| MethodField::new(path, field, type_mapper))
        .collect()
}
