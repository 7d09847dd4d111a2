//! Per-class template context.

use ecsgen_core::{TypeMapper, to_pascal_case};
use ecsgen_schema::TypeDefinition;
use serde::Serialize;

use crate::{GeneratorConfig, MethodField, method_fields};

/// Data handed to the class template for one type definition.
///
/// Keys are serialized in camelCase (`className`, `docsUrl`,
/// `methodCollection`) to match the template variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassContext {
    pub class_name: String,
    pub version: String,
    pub description: String,
    pub docs_url: String,
    pub method_collection: Vec<MethodField>,
}

impl ClassContext {
    pub fn new(
        definition: &TypeDefinition,
        config: &GeneratorConfig,
        type_mapper: &dyn TypeMapper,
    ) -> Self {
        Self {
            class_name: to_pascal_case(&definition.title),
            version: config.version.clone(),
            description: definition.description.clone(),
            docs_url: config.docs_url_for(&definition.name),
            method_collection: method_fields(&definition.fields, type_mapper),
        }
    }
}
