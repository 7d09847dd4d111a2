mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use ecsgen_codegen::{GeneratorConfig, config::CONFIG_FILE};
use eyre::{Context, Result};
use generate::GenerateCommand;
use list::ListCommand;
use tracing::debug;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ecsgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ecsgen")]
#[command(version)]
#[command(about = "Generate ECS field-set classes from an ECS schema")]
pub(crate) struct Cli {
    /// Path to the config file (defaults to ./ecsgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.command {
            None => GenerateCommand::default().run(config),
            Some(Commands::Generate(cmd)) => cmd.run(config),
            Some(Commands::List(cmd)) => cmd.run(config),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }

    /// An explicit `--config` must exist; the default file is optional.
    fn load_config(&self) -> Result<GeneratorConfig> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path),
            None => GeneratorConfig::load_or_default(CONFIG_FILE),
        };
        let config = config.wrap_err("Failed to load configuration")?;
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate classes from the schema (default)
    Generate(GenerateCommand),

    /// List the schema entries and the classes they produce
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
