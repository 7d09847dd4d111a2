//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Schema, error::SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.yml")
    }
}

impl Schema {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    serde_yaml::from_str(content).map_err(|e| source_ctx.parse_error(e))
}

#[cfg(test)]
mod tests {
    use serde_yaml::Value;

    use super::*;

    const HOST_AND_AGENT: &str = r#"
host:
  title: Host
  name: host
  group: 2
  description: A host is defined as a general computing instance.
  type: group
  fields:
    host.name:
      type: keyword
      level: core
      description: Name of the host.
      example: web-01
    host.uptime:
      type: long
      description: Seconds the host has been up.
      example: 1325
agent:
  title: Agent
  name: agent
  description: The agent fields contain the data about the software entity.
  fields:
    agent.ephemeral_id:
      type: keyword
      description: Ephemeral identifier of this agent.
"#;

    #[test]
    fn test_parse_keeps_document_order() {
        let schema: Schema = HOST_AND_AGENT.parse().unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["host", "agent"]);

        let host = schema.get("host").unwrap();
        let fields: Vec<&str> = host.fields.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["host.name", "host.uptime"]);
    }

    #[test]
    fn test_parse_type_definition() {
        let schema: Schema = HOST_AND_AGENT.parse().unwrap();
        let host = schema.get("host").unwrap();

        assert_eq!(host.title, "Host");
        assert_eq!(host.name, "host");
        assert_eq!(
            host.description,
            "A host is defined as a general computing instance."
        );
    }

    #[test]
    fn test_parse_field_examples() {
        let schema: Schema = HOST_AND_AGENT.parse().unwrap();
        let host = schema.get("host").unwrap();

        let name = &host.fields["host.name"];
        assert_eq!(name.field_type, "keyword");
        assert_eq!(name.example, Some(Value::from("web-01")));

        let uptime = &host.fields["host.uptime"];
        assert_eq!(uptime.field_type, "long");
        assert_eq!(uptime.example, Some(Value::from(1325)));

        let agent = schema.get("agent").unwrap();
        assert_eq!(agent.fields["agent.ephemeral_id"].example, None);
    }

    #[test]
    fn test_parse_null_example_is_absent() {
        let schema: Schema = r#"
event:
  title: Event
  name: event
  fields:
    event.id:
      type: keyword
      description: Unique ID
      example: ~
"#
        .parse()
        .unwrap();

        assert_eq!(schema.get("event").unwrap().fields["event.id"].example, None);
    }

    #[test]
    fn test_parse_entry_without_fields() {
        let schema: Schema = "base:\n  title: Base\n  name: base\n".parse().unwrap();
        let base = schema.get("base").unwrap();

        assert!(base.fields.is_empty());
        assert_eq!(base.description, "");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_schema("host:\n  title: [unclosed\n", "schema.yml").unwrap_err();

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_on_missing_field_type() {
        let err = parse_schema(
            "host:\n  title: Host\n  name: host\n  fields:\n    host.name:\n      description: d\n",
            "schema.yml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Schema::from_file("does/not/exist.yml").unwrap_err();

        match *err {
            Error::Io { path, .. } => assert_eq!(path, Path::new("does/not/exist.yml")),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_goes_through_parse_schema() {
        let temp = tempfile::TempDir::new().unwrap();
        let good = temp.path().join("schema.yml");
        std::fs::write(&good, HOST_AND_AGENT).unwrap();
        let bad = temp.path().join("broken.yml");
        std::fs::write(&bad, "host: [\n").unwrap();

        let schema = Schema::from_file(&good).unwrap();
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["host", "agent"]);

        let err = Schema::from_file(&bad).unwrap_err();
        match *err {
            Error::Parse { src, .. } => assert_eq!(src.name(), bad.display().to_string()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
