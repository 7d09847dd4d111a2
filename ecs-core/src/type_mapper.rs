//! Type mapping between schema type tags and language-specific types.

/// Trait for mapping schema type tags to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Map a schema type tag (e.g., "keyword") to a language type name.
    ///
    /// Tags the mapper does not know are returned unchanged.
    fn map_type(&self, tag: &str) -> String;
}

/// PHP type mapper implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpTypeMapper;

impl TypeMapper for PhpTypeMapper {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn map_type(&self, tag: &str) -> String {
        match tag {
            "keyword" => "string",
            "number" | "long" => "int",
            other => other,
        }
        .to_string()
    }
}
