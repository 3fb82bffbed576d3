//! Schema entity - the raw, per-domain declaration as supplied by the author
//!
//! Nodes are kept as a generic tree until the expander validates them, so
//! the same shapes can arrive from YAML, JSON or TOML.

use std::collections::BTreeMap;

use serde_json::Value;

/// Top-level shape problems (before any section is looked at)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaShapeError {
    #[error("schema root must be a map of domain names, found {found}")]
    RootNotMap { found: &'static str },

    #[error("domain '{domain}' must be a map of artifact sections, found {found}")]
    DomainNotMap { domain: String, found: &'static str },
}

/// Human-readable name of a node's JSON type
pub fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Undigested declaration of one domain: section tag → raw node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDomain {
    pub name: String,
    pub sections: BTreeMap<String, Value>,
}

impl RawDomain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: BTreeMap::new(),
        }
    }

    pub fn with_section(mut self, tag: impl Into<String>, node: Value) -> Self {
        self.sections.insert(tag.into(), node);
        self
    }

    pub fn has_section(&self, tag: &str) -> bool {
        self.sections.contains_key(tag)
    }
}

/// The full schema: every domain the generator runs over
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub domains: Vec<RawDomain>,
}

impl Schema {
    /// Build from a generic node tree (`domain -> section -> ...`)
    pub fn from_value(value: Value) -> Result<Self, SchemaShapeError> {
        let Value::Object(root) = value else {
            return Err(SchemaShapeError::RootNotMap {
                found: node_kind(&value),
            });
        };

        let mut domains = Vec::with_capacity(root.len());
        for (name, node) in root {
            match node {
                Value::Object(sections) => domains.push(RawDomain {
                    name,
                    sections: sections.into_iter().collect(),
                }),
                other => {
                    return Err(SchemaShapeError::DomainNotMap {
                        domain: name,
                        found: node_kind(&other),
                    })
                }
            }
        }

        Ok(Self { domains })
    }

    pub fn domain(&self, name: &str) -> Option<&RawDomain> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.name.as_str()).collect()
    }
}
