//! Schema document types.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of an ECS nested schema document.
///
/// Entries keep the order in which they appear in the YAML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    /// Look up a type definition by its key (e.g. "host").
    pub fn get(&self, key: &str) -> Option<&TypeDefinition> {
        self.types.get(key)
    }

    /// Iterate over `(key, definition)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDefinition)> {
        self.types.iter().map(|(key, def)| (key.as_str(), def))
    }

    /// Type keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<(String, TypeDefinition)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, TypeDefinition)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

/// One top-level entry of the schema, producing one generated class.
///
/// Keys not listed here (`group`, `prefix`, `short`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeDefinition {
    /// Human-readable name, e.g. "Host"
    pub title: String,
    /// Slug used in the documentation URL, e.g. "host"
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Dotted field paths mapped to their definitions, in document order
    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,
}

/// A single field of a type definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldDefinition {
    /// Schema type tag, e.g. "keyword" or "long"
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub description: String,
    /// Example value; `None` when the key is absent or null
    #[serde(default)]
    pub example: Option<serde_yaml::Value>,
}

impl FieldDefinition {
    pub fn new(field_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            description: description.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<serde_yaml::Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}
