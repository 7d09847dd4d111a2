//! Class generation from a loaded schema.

use std::path::PathBuf;

use ecsgen_core::{File, PhpTypeMapper, TypeMapper};
use ecsgen_schema::{Schema, SchemaFile};
use tracing::{debug, info};

use crate::{ClassContext, Error, GeneratorConfig, Renderer, Result};

/// Renders one class per schema entry and writes it to the output directory.
///
/// Entries are processed in schema order and the first failure stops the
/// run. Files written before the failure are left in place.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    renderer: Renderer,
    type_mapper: Box<dyn TypeMapper>,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in schema order
    pub written: Vec<WrittenFile>,
}

/// A class file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub class_name: String,
    pub path: PathBuf,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl<'a> Generator<'a> {
    /// Create a generator loading templates from `config.templates`.
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            renderer: Renderer::from_dir(&config.templates),
            type_mapper: Box::new(PhpTypeMapper),
        }
    }

    /// Use a different template environment.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Use a different type mapper.
    pub fn with_type_mapper(mut self, type_mapper: impl TypeMapper + 'static) -> Self {
        self.type_mapper = Box::new(type_mapper);
        self
    }

    /// Template contexts for every schema entry, in schema order.
    pub fn classes(&self) -> impl Iterator<Item = ClassContext> + '_ {
        self.schema
            .iter()
            .map(|(_, definition)| ClassContext::new(definition, self.config, &*self.type_mapper))
    }

    /// Render every class without touching the filesystem.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.classes()
            .map(|class| {
                let content = self.render(&class)?;
                Ok(PreviewFile {
                    path: self.config.file_name(&class.class_name, &*self.type_mapper),
                    content,
                })
            })
            .collect()
    }

    /// Render and write every class into the output directory.
    pub fn generate(&self) -> Result<GenerateResult> {
        info!(
            types = self.schema.len(),
            language = self.type_mapper.language(),
            output = %self.config.output.display(),
            "generating classes"
        );

        let mut result = GenerateResult::default();
        for class in self.classes() {
            debug!(
                class = %class.class_name,
                fields = class.method_collection.len(),
                "rendering class"
            );
            let file = File::new(
                self.config.output_path(&class.class_name, &*self.type_mapper),
                self.render(&class)?,
            );
            file.write().map_err(|source| Error::Write {
                path: file.path().to_path_buf(),
                source,
            })?;
            debug!(path = %file.path().display(), "wrote class");

            result.written.push(WrittenFile {
                class_name: class.class_name,
                path: file.path().to_path_buf(),
            });
        }

        info!(written = result.written.len(), "generation finished");
        Ok(result)
    }

    fn render(&self, class: &ClassContext) -> Result<String> {
        self.renderer
            .render(&self.config.template, class)
            .map_err(|source| Error::Render {
                template: self.config.template.clone(),
                class_name: class.class_name.clone(),
                source,
            })
    }
}

/// Load the configured schema and generate every class.
pub fn run(config: &GeneratorConfig) -> Result<GenerateResult> {
    let schema_file = SchemaFile::open(&config.schema)?;
    Generator::new(schema_file.schema(), config).generate()
}
