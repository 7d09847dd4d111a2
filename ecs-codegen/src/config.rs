//! Generator configuration.
//!
//! The defaults reproduce the conventional layout of an ECS class project:
//! `schema.yml` and `templates/` next to each other, classes written to
//! `generated/`. An `ecsgen.toml` file may override any subset of the keys.

use std::path::{Path, PathBuf};

use ecsgen_core::TypeMapper;
use serde::Deserialize;

use crate::{Error, Result};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "ecsgen.toml";

/// Placeholder replaced by a type's `name` in [`GeneratorConfig::docs_url`].
pub const DOCS_URL_PLACEHOLDER: &str = "{name}";

/// Everything a generation run needs besides the schema itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path of the ECS nested YAML schema
    pub schema: PathBuf,
    /// Directory templates are loaded from
    pub templates: PathBuf,
    /// Directory generated classes are written to
    pub output: PathBuf,
    /// Name of the class template inside `templates`
    pub template: String,
    /// ECS version label passed to the template
    pub version: String,
    /// Documentation URL with a `{name}` placeholder
    pub docs_url: String,
    /// Extension of generated files, without the dot; the type mapper's
    /// extension when unset
    pub extension: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("./schema.yml"),
            templates: PathBuf::from("./templates"),
            output: PathBuf::from("./generated"),
            template: "class.twig".to_string(),
            version: "v1.8".to_string(),
            docs_url: "https://www.elastic.co/guide/en/ecs/current/ecs-{name}.html".to_string(),
            extension: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from TOML; `path` is only used for error reporting.
    pub fn from_toml_str(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.into(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Read a config file, falling back to the defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Documentation URL for a type, e.g. `.../ecs-host.html` for "host".
    pub fn docs_url_for(&self, name: &str) -> String {
        self.docs_url.replace(DOCS_URL_PLACEHOLDER, name)
    }

    /// File name of a generated class, e.g. `Host.php`.
    pub fn file_name(&self, class_name: &str, type_mapper: &dyn TypeMapper) -> String {
        let extension = self
            .extension
            .as_deref()
            .unwrap_or_else(|| type_mapper.file_extension());
        format!("{}.{}", class_name, extension)
    }

    /// Output path of a generated class.
    pub fn output_path(&self, class_name: &str, type_mapper: &dyn TypeMapper) -> PathBuf {
        self.output.join(self.file_name(class_name, type_mapper))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ecsgen_core::PhpTypeMapper;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();

        assert_eq!(config.schema, PathBuf::from("./schema.yml"));
        assert_eq!(config.templates, PathBuf::from("./templates"));
        assert_eq!(config.output, PathBuf::from("./generated"));
        assert_eq!(config.template, "class.twig");
        assert_eq!(config.version, "v1.8");
        assert_eq!(config.extension, None);
    }

    #[test]
    fn test_docs_url_for() {
        let config = GeneratorConfig::default();

        assert_eq!(
            config.docs_url_for("host"),
            "https://www.elastic.co/guide/en/ecs/current/ecs-host.html"
        );
    }

    #[test]
    fn test_output_path() {
        let config = GeneratorConfig {
            output: PathBuf::from("out"),
            ..Default::default()
        };

        assert_eq!(config.file_name("Host", &PhpTypeMapper), "Host.php");
        assert_eq!(
            config.output_path("Host", &PhpTypeMapper),
            Path::new("out").join("Host.php")
        );
    }

    #[test]
    fn test_explicit_extension_wins_over_mapper() {
        let config = GeneratorConfig {
            extension: Some("inc".to_string()),
            ..Default::default()
        };

        assert_eq!(config.file_name("Host", &PhpTypeMapper), "Host.inc");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            output = "src/Ecs"
            version = "v8.11"
            "#,
            CONFIG_FILE,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("src/Ecs"));
        assert_eq!(config.version, "v8.11");
        assert_eq!(config.template, "class.twig");
        assert_eq!(config.schema, PathBuf::from("./schema.yml"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GeneratorConfig::from_toml_str("outptu = \"src\"", CONFIG_FILE).unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();

        let config = GeneratorConfig::load_or_default(temp.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "extension = \"inc\"\n").unwrap();

        let config = GeneratorConfig::load_or_default(&path).unwrap();
        assert_eq!(config.extension.as_deref(), Some("inc"));

        let missing = GeneratorConfig::from_file(temp.path().join("other.toml")).unwrap_err();
        assert!(matches!(missing, Error::ConfigIo { .. }));
    }
}
