use std::path::PathBuf;

use clap::Args;
use ecsgen_codegen::GeneratorConfig;
use ecsgen_schema::SchemaFile;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    /// Path to the ECS nested YAML schema (defaults to ./schema.yml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Directory containing the class template (defaults to ./templates)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Output directory (defaults to ./generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template name inside the template directory (defaults to class.twig)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config: GeneratorConfig) -> Result<()> {
        let config = self.apply(config);
        let schema_file = SchemaFile::open(&config.schema).unwrap_or_exit();

        let report = generate(
            schema_file.schema(),
            &config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Command-line flags take precedence over the config file.
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }
        if let Some(templates) = &self.templates {
            config.templates = templates.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        config
    }
}
