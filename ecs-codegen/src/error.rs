use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] Box<ecsgen_schema::Error>),

    #[error("failed to read config '{path}'")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}'")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render template '{template}' for class '{class_name}'")]
    Render {
        template: String,
        class_name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
