//! Name resolver
//!
//! Pure, table-driven mapping from an artifact's logical name and type tag to
//! its namespace, class name, interface name and scalar type. No I/O.

use serde::Serialize;

use super::case::to_camel_case;
use crate::domain::entities::Leaf;
use crate::domain::value_objects::{
    ArtifactType, ColumnSource, Layer, ScalarType, StorageType, UnknownArtifactType,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    UnknownArtifactType(#[from] UnknownArtifactType),

    #[error("unknown value object kind '{kind}'")]
    UnknownValueObjectKind { kind: String },
}

/// Semantic value-object kinds and the scalar category each wraps
pub const VALUE_OBJECT_KINDS: [(&str, ScalarType); 16] = [
    ("identity_uuid", ScalarType::String),
    ("identity_email", ScalarType::String),
    ("identity_username", ScalarType::String),
    ("identity_password", ScalarType::String),
    ("person_name", ScalarType::String),
    ("person_age", ScalarType::Int),
    ("person_gender", ScalarType::String),
    ("money_amount", ScalarType::Float),
    ("money_currency", ScalarType::String),
    ("number_integer", ScalarType::Int),
    ("number_decimal", ScalarType::Float),
    ("text_string", ScalarType::String),
    ("flag_boolean", ScalarType::Bool),
    ("dateTime_date", ScalarType::DateTime),
    ("dateTime_dateTime", ScalarType::DateTime),
    ("structure_collection", ScalarType::Array),
];

/// Kind assumed for the reserved `uuid` / `process_uuid` identities
pub const IDENTITY_KIND: &str = "identity_uuid";

/// Layer of a raw type tag; anything outside the closed set is an error
pub fn layer_of(tag: &str) -> Result<Layer, ResolveError> {
    Ok(tag.parse::<ArtifactType>()?.layer())
}

/// Suffix appended to the camel-cased artifact name
pub fn suffix_of(artifact_type: ArtifactType) -> String {
    suffix_for_tag(artifact_type.as_str())
}

fn suffix_for_tag(tag: &str) -> String {
    match tag {
        "value_object" | "cli" => String::new(),
        "command_handler" | "query_handler" => "Handler".to_string(),
        "rpc" => "Method".to_string(),
        other => to_camel_case(other, ""),
    }
}

/// Tag used for suffixing; task repositories take the ordinary repository rule
fn suffix_tag(tag: &str) -> &str {
    match tag {
        "repository_task" => "taskRepository",
        other => other,
    }
}

/// Naive past tense: `d` after a trailing `e`, `ed` otherwise
fn past_tense(mut word: String) -> String {
    if word.ends_with('e') {
        word.push('d');
    } else {
        word.push_str("ed");
    }
    word
}

/// Short class name, e.g. `register` + `command` → `RegisterCommand`
///
/// Events are put in the past tense first (`register` → `RegisteredEvent`).
pub fn short_class_name(name: &str, artifact_type: ArtifactType) -> String {
    let mut class = to_camel_case(name, "");
    if artifact_type == ArtifactType::Event {
        class = past_tense(class);
    }
    class.push_str(&suffix_for_tag(suffix_tag(artifact_type.as_str())));
    class
}

/// Short interface name, e.g. `user` + `entity_interface` → `UserEntityInterface`
pub fn short_interface_name(name: &str, artifact_type: ArtifactType) -> String {
    let stripped = artifact_type
        .as_str()
        .replace("Interface", "")
        .replace("interface", "");
    let stripped = stripped.trim_matches('_');
    let mut interface = to_camel_case(name, "");
    interface.push_str(&suffix_for_tag(suffix_tag(stripped)));
    interface.push_str("Interface");
    interface
}

/// Namespace relative to the domain root, e.g. `Domain/Command/Task`
pub fn namespace_for(artifact_type: ArtifactType) -> String {
    let tail = match artifact_type {
        ArtifactType::CommandTask => "command/Task",
        ArtifactType::CommandHandlerTask => "commandHandler/Task",
        other => other.as_str(),
    };
    format!(
        "{}/{}",
        artifact_type.layer().directory_name(),
        to_camel_case(tail, "")
    )
}

/// Scalar category of a semantic value-object kind
pub fn value_object_scalar_type(kind: &str) -> Result<ScalarType, ResolveError> {
    VALUE_OBJECT_KINDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, scalar)| *scalar)
        .ok_or_else(|| ResolveError::UnknownValueObjectKind {
            kind: kind.to_string(),
        })
}

/// Persistence type for a scalar category (or the uuid marker)
pub fn scalar_to_storage_type(source: ColumnSource) -> StorageType {
    match source {
        ColumnSource::Uuid => StorageType::UuidBinary,
        ColumnSource::Scalar(ScalarType::String) => StorageType::String,
        ColumnSource::Scalar(ScalarType::Int) => StorageType::Integer,
        ColumnSource::Scalar(ScalarType::Float) => StorageType::Float,
        ColumnSource::Scalar(ScalarType::Bool) => StorageType::Boolean,
        ColumnSource::Scalar(ScalarType::Array) => StorageType::Json,
        ColumnSource::Scalar(ScalarType::DateTime) => StorageType::Datetime,
    }
}

/// Everything a generator needs to know about an artifact's identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNames {
    pub layer: Layer,
    pub artifact_type: ArtifactType,
    /// Logical name the class names were derived from
    pub name: String,
    pub namespace: String,
    pub class_name: String,
    pub interface_name: String,
}

impl ResolvedNames {
    /// Name the artifact is emitted under (interface types use the interface name)
    pub fn emitted_name(&self) -> &str {
        if self.artifact_type.is_interface() {
            &self.interface_name
        } else {
            &self.class_name
        }
    }

    /// Namespace segments, for building output paths
    pub fn namespace_segments(&self) -> impl Iterator<Item = &str> {
        self.namespace.split('/')
    }
}

/// Resolve names for an artifact named directly by `name`
pub fn resolve(artifact_type: ArtifactType, name: &str) -> ResolvedNames {
    resolve_as(artifact_type, artifact_type, name)
}

/// Resolve names for a structure leaf
///
/// Repository interfaces are keyed `<concrete>.<name>` and named after the
/// concrete repository they abstract.
pub fn resolve_leaf(leaf: &Leaf<'_>) -> ResolvedNames {
    if leaf.artifact_type == ArtifactType::RepositoryInterface {
        let concrete = leaf.spec.repository.unwrap_or(ArtifactType::Repository);
        let name = leaf
            .spec
            .entity
            .as_deref()
            .or_else(|| leaf.name.split_once('.').map(|(_, n)| n))
            .unwrap_or(leaf.name);
        return resolve_as(leaf.artifact_type, concrete, name);
    }
    resolve(leaf.artifact_type, leaf.name)
}

fn resolve_as(artifact_type: ArtifactType, naming_type: ArtifactType, name: &str) -> ResolvedNames {
    ResolvedNames {
        layer: artifact_type.layer(),
        artifact_type,
        name: name.to_string(),
        namespace: namespace_for(artifact_type),
        class_name: short_class_name(name, naming_type),
        interface_name: short_interface_name(name, naming_type),
    }
}
