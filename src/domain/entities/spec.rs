//! ArtifactSpec entity - the per-artifact declaration node
//!
//! The shape varies by artifact type, so a spec is a record of optional parts.
//! Every spec carries enough for the name resolver and a generator to work.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::{ArtifactType, ScalarType};

/// Identity keys that are valid value-object references even when undeclared
pub const RESERVED_IDENTITIES: [&str; 2] = ["uuid", "process_uuid"];

/// Returns true for `uuid` / `process_uuid`
pub fn is_reserved_identity(name: &str) -> bool {
    RESERVED_IDENTITIES.contains(&name)
}

/// One constructor or method argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Arg {
    /// Reference to a declared value object (or a reserved identity)
    ValueObject { name: String },
    /// Reference to another artifact of the expanded structure
    Artifact {
        name: String,
        artifact: ArtifactType,
        interface: bool,
    },
    /// Named argument of a plain scalar type
    Scalar { name: String, scalar: ScalarType },
    /// Fully-qualified type outside the generated code
    External { type_name: String },
}

impl Arg {
    pub fn value_object(name: impl Into<String>) -> Self {
        Arg::ValueObject { name: name.into() }
    }

    pub fn artifact(name: impl Into<String>, artifact: ArtifactType) -> Self {
        Arg::Artifact {
            name: name.into(),
            artifact,
            interface: false,
        }
    }

    /// Reference to the interface of another artifact
    pub fn interface(name: impl Into<String>, artifact: ArtifactType) -> Self {
        Arg::Artifact {
            name: name.into(),
            artifact,
            interface: true,
        }
    }

    pub fn scalar(name: impl Into<String>, scalar: ScalarType) -> Self {
        Arg::Scalar {
            name: name.into(),
            scalar,
        }
    }

    pub fn external(type_name: impl Into<String>) -> Self {
        Arg::External {
            type_name: type_name.into(),
        }
    }

    /// Logical name of the argument
    ///
    /// External types are named by their last path segment.
    pub fn name(&self) -> &str {
        match self {
            Arg::ValueObject { name } | Arg::Artifact { name, .. } | Arg::Scalar { name, .. } => {
                name.as_str()
            }
            Arg::External { type_name } => type_name
                .rsplit(['\\', '/', ':'])
                .next()
                .unwrap_or(type_name.as_str()),
        }
    }

    /// Value-object name, if this argument references one
    pub fn value_object_name(&self) -> Option<&str> {
        match self {
            Arg::ValueObject { name } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// What a command's event entry declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventOutcome {
    /// The event carries exactly these arguments
    Args(Vec<Arg>),
    /// The event triggers the named command
    Next(String),
    /// The event ends the process when `true`
    Terminal(bool),
}

/// A method an artifact exposes (repositories, projectors)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MethodSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl MethodSpec {
    pub fn new(args: Vec<Arg>, returns: Option<&str>) -> Self {
        Self {
            args,
            returns: returns.map(str::to_string),
        }
    }
}

/// One product a factory builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    #[serde(rename = "type")]
    pub artifact: ArtifactType,
}

impl Product {
    pub fn new(name: impl Into<String>, artifact: ArtifactType) -> Self {
        Self {
            name: name.into(),
            artifact,
        }
    }
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Declaration node of a single artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
    /// Owning entity (commands, events, handlers, entity-bound repositories)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Semantic kind of a value object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, EventOutcome>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub methods: BTreeMap<String, MethodSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
    /// Concrete repository a repository interface abstracts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<ArtifactType>,
    /// `false` suppresses the domain-layer repository interface
    #[serde(skip_serializing_if = "is_true")]
    pub repository_interface: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_command: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub terminal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl Default for ArtifactSpec {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            entity: None,
            kind: None,
            events: BTreeMap::new(),
            methods: BTreeMap::new(),
            products: Vec::new(),
            repository: None,
            repository_interface: true,
            next_command: None,
            terminal: false,
            returns: None,
        }
    }
}

impl ArtifactSpec {
    pub fn with_args(args: Vec<Arg>) -> Self {
        Self {
            args,
            ..Self::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn without_interface(mut self) -> Self {
        self.repository_interface = false;
        self
    }

    /// Append a factory product unless it is already listed
    pub fn push_product(&mut self, product: Product) {
        if !self.products.contains(&product) {
            self.products.push(product);
        }
    }

    /// Every argument of the spec: constructor, event and method args
    fn all_args(&self) -> impl Iterator<Item = &Arg> {
        let event_args = self.events.values().flat_map(|outcome| match outcome {
            EventOutcome::Args(args) => args.as_slice(),
            _ => &[][..],
        });
        let method_args = self.methods.values().flat_map(|m| m.args.iter());
        self.args.iter().chain(event_args).chain(method_args)
    }

    /// Value-object names referenced by args, events and methods
    pub fn value_object_refs(&self) -> impl Iterator<Item = &str> {
        self.all_args().filter_map(Arg::value_object_name)
    }

    /// `(name, type)` of every artifact referenced by args, events and methods
    pub fn artifact_refs(&self) -> impl Iterator<Item = (&str, ArtifactType)> {
        self.all_args().filter_map(|arg| match arg {
            Arg::Artifact { name, artifact, .. } => Some((name.as_str(), *artifact)),
            _ => None,
        })
    }
}

/// Artifact name → spec, for one artifact type
pub type Section = BTreeMap<String, ArtifactSpec>;
