//! Generate operation - class generation from the schema.

use ecsgen_codegen::{Generator, GeneratorConfig};
use ecsgen_schema::Schema;
use eyre::{Context, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Renders every schema entry and either writes the classes or collects
/// them for preview.
pub fn generate(
    schema: &Schema,
    config: &GeneratorConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(schema, config);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render classes")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator.generate().wrap_err("Failed to generate classes")?;
        GenerationResult::Written(WrittenResult {
            output_dir: config.output.clone(),
            files: written.written.into_iter().map(|w| w.path).collect(),
        })
    };

    Ok(GenerateReport {
        schema_path: config.schema.clone(),
        version: config.version.clone(),
        type_count: schema.len(),
        result,
    })
}
