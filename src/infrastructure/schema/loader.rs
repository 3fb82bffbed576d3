//! Schema loader (YAML / JSON / TOML)

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::Schema;
use crate::error::{LayergenError, LayergenResult};

/// Serialization format of a schema file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick a format from the file extension, YAML when unknown
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => SchemaFormat::Json,
            Some("toml") => SchemaFormat::Toml,
            _ => SchemaFormat::Yaml,
        }
    }
}

/// Read and parse a schema file
pub fn load_schema(path: &Path) -> LayergenResult<Schema> {
    let content = std::fs::read_to_string(path).map_err(|e| LayergenError::SchemaLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let schema = parse_schema(&content, SchemaFormat::from_path(path)).map_err(|e| match e {
        LayergenError::SchemaLoad { message, .. } => LayergenError::SchemaLoad {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;
    tracing::debug!(path = %path.display(), domains = schema.domains.len(), "loaded schema");
    Ok(schema)
}

/// Parse schema text in the given format
pub fn parse_schema(content: &str, format: SchemaFormat) -> LayergenResult<Schema> {
    let value = parse_value(content, format).map_err(|message| LayergenError::SchemaLoad {
        path: Default::default(),
        message,
    })?;
    Ok(Schema::from_value(value)?)
}

fn parse_value(content: &str, format: SchemaFormat) -> Result<Value, String> {
    match format {
        SchemaFormat::Yaml => serde_yaml_ng::from_str::<Value>(content).map_err(|e| e.to_string()),
        SchemaFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        SchemaFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const USER_YAML: &str = r#"
User:
  entity:
    user: [register, validate]
  value_object: {process_uuid, uuid, name, age, user}
  command:
    register:
      args: [process_uuid, uuid, user]
      entity: user
      event:
        register: [process_uuid, uuid, user]
"#;

    #[test]
    fn format_from_extension() {
        assert_eq!(SchemaFormat::from_path(Path::new("s.json")), SchemaFormat::Json);
        assert_eq!(SchemaFormat::from_path(Path::new("s.TOML")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("s.yml")), SchemaFormat::Yaml);
        assert_eq!(SchemaFormat::from_path(Path::new("schema")), SchemaFormat::Yaml);
    }

    #[test]
    fn yaml_flow_set_declares_null_value_objects() {
        let schema = parse_schema(USER_YAML, SchemaFormat::Yaml).unwrap();
        let user = schema.domain("User").unwrap();
        assert_eq!(
            user.sections["value_object"],
            serde_json::json!({"process_uuid": null, "uuid": null, "name": null, "age": null, "user": null})
        );
    }

    #[test]
    fn json_and_toml_are_equivalent() {
        let json = r#"{"Billing": {"entity": {"invoice": []}, "value_object": {}, "command": {}}}"#;
        let toml = "[Billing]\nvalue_object = {}\ncommand = {}\n[Billing.entity]\ninvoice = []\n";

        let from_json = parse_schema(json, SchemaFormat::Json).unwrap();
        let from_toml = parse_schema(toml, SchemaFormat::Toml).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn non_map_root_is_shape_error() {
        let err = parse_schema("- a\n- b\n", SchemaFormat::Yaml).unwrap_err();
        assert!(matches!(err, LayergenError::SchemaShape(_)));
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        match load_schema(&path).unwrap_err() {
            LayergenError::SchemaLoad { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_missing_file() {
        let err = load_schema(&PathBuf::from("/nonexistent/schema.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/schema.yaml"));
    }
}
