//! TemplateStore port - where generator templates come from
//!
//! Templates are plain text with `{name}` placeholders. Rendering is a
//! verbatim token replace: no conditionals, no loops, no escaping.
//! Placeholders without a value are left in place.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Built-in template identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Class,
    Interface,
    Factory,
    ValueObject,
    Migration,
    Method,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Class,
        TemplateId::Interface,
        TemplateId::Factory,
        TemplateId::ValueObject,
        TemplateId::Migration,
        TemplateId::Method,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Class => "class",
            TemplateId::Interface => "interface",
            TemplateId::Factory => "factory",
            TemplateId::ValueObject => "value_object",
            TemplateId::Migration => "migration",
            TemplateId::Method => "method",
        }
    }

    /// File name inside a template directory
    pub fn file_name(&self) -> String {
        format!("{}.tpl", self.as_str())
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template '{id}' not found at {}", .path.display())]
    NotFound { id: TemplateId, path: PathBuf },

    #[error("failed to read template '{id}': {source}")]
    Io {
        id: TemplateId,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    source: String,
}

impl Template {
    pub fn new(id: TemplateId, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace every `{key}` with its value in a single pass
    pub fn render(&self, vars: &BTreeMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after
                .find('}')
                .and_then(|close| vars.get(&after[..close]).map(|v| (close, v)));
            match value {
                Some((close, value)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

pub trait TemplateStore {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for Box<T> {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError> {
        (**self).load(id)
    }
}
