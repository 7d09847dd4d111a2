use std::path::PathBuf;

use clap::Args;
use ecsgen_codegen::GeneratorConfig;
use ecsgen_schema::SchemaFile;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::list,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the ECS nested YAML schema (defaults to ./schema.yml)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self, mut config: GeneratorConfig) -> Result<()> {
        if let Some(schema) = &self.schema {
            config.schema = schema.clone();
        }
        let schema_file = SchemaFile::open(&config.schema).unwrap_or_exit();

        list(schema_file.schema(), &config).render(&mut TerminalOutput::new());

        Ok(())
    }
}
