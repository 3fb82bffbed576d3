//! Spec parser
//!
//! Turns raw schema nodes into typed [`ArtifactSpec`]s. Accepted shapes:
//!
//! - `entity`: a list of method names, or a map
//! - `value_object`: null, a kind string, or a map with `type`/`kind`
//! - everything else: null, a list (taken as args), or a map with any of
//!   `args`, `entity`, `kind`/`type`, `methods`, `event`/`events`, `returns`,
//!   `repository_interface`

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::schema_expander::ExpandError;
use crate::domain::entities::{node_kind, Arg, ArtifactSpec, EventOutcome, MethodSpec, Section};
use crate::domain::value_objects::{ArtifactType, ScalarType};

/// Whether `name` can become a class and file name
///
/// Letters, digits, `_` and `-` only; anything else could leave the
/// artifact's directory once the name is joined into a path.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Reject declared names that cannot become a class and file name
pub fn check_name(artifact_type: ArtifactType, name: &str) -> Result<(), ExpandError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(invalid(
            artifact_type,
            name,
            "names may only contain letters, digits, '_' and '-'".to_string(),
        ))
    }
}

/// Parse a `name -> spec` section
pub fn parse_section(artifact_type: ArtifactType, node: &Value) -> Result<Section, ExpandError> {
    match node {
        Value::Null => Ok(Section::new()),
        Value::Object(entries) => entries
            .iter()
            .map(|(name, spec)| -> Result<(String, ArtifactSpec), ExpandError> {
                check_name(artifact_type, name)?;
                Ok((name.clone(), parse_spec(artifact_type, name, spec)?))
            })
            .collect(),
        // `value_object: [uuid, name]` declares kind-less value objects
        Value::Array(items) if artifact_type == ArtifactType::ValueObject => items
            .iter()
            .map(|item| match item {
                Value::String(name) => check_name(artifact_type, name)
                    .map(|()| (name.clone(), ArtifactSpec::default())),
                other => Err(invalid(
                    artifact_type,
                    "",
                    format!("expected value object name, found {}", node_kind(other)),
                )),
            })
            .collect(),
        other => Err(invalid(
            artifact_type,
            "",
            format!("section must be a map, found {}", node_kind(other)),
        )),
    }
}

/// Parse a single artifact spec
pub fn parse_spec(
    artifact_type: ArtifactType,
    name: &str,
    node: &Value,
) -> Result<ArtifactSpec, ExpandError> {
    match (artifact_type, node) {
        (_, Value::Null) => Ok(ArtifactSpec::default()),
        (ArtifactType::Entity, Value::Array(items)) => Ok(ArtifactSpec {
            methods: parse_method_names(artifact_type, name, items)?,
            ..ArtifactSpec::default()
        }),
        (ArtifactType::ValueObject, Value::String(kind)) => Ok(ArtifactSpec {
            kind: Some(kind.clone()),
            ..ArtifactSpec::default()
        }),
        (_, Value::Array(items)) => Ok(ArtifactSpec::with_args(parse_args(
            artifact_type,
            name,
            items,
        )?)),
        (_, Value::Object(map)) => parse_map(artifact_type, name, map),
        (_, other) => Err(invalid(
            artifact_type,
            name,
            format!("unexpected {}", node_kind(other)),
        )),
    }
}

fn parse_map(
    artifact_type: ArtifactType,
    name: &str,
    map: &Map<String, Value>,
) -> Result<ArtifactSpec, ExpandError> {
    let mut spec = ArtifactSpec::default();

    for (key, value) in map {
        match key.as_str() {
            "args" => {
                let items = expect_list(artifact_type, name, key, value)?;
                spec.args = parse_args(artifact_type, name, items)?;
            }
            "entity" => spec.entity = Some(expect_string(artifact_type, name, key, value)?),
            "kind" | "type" => spec.kind = Some(expect_string(artifact_type, name, key, value)?),
            "returns" => spec.returns = Some(expect_string(artifact_type, name, key, value)?),
            "repository_interface" => match value {
                Value::Bool(flag) => spec.repository_interface = *flag,
                other => {
                    return Err(invalid(
                        artifact_type,
                        name,
                        format!("'repository_interface' must be a boolean, found {}", node_kind(other)),
                    ))
                }
            },
            "methods" => spec.methods = parse_methods(artifact_type, name, value)?,
            "event" | "events" => spec.events = parse_events(artifact_type, name, value)?,
            other => {
                tracing::debug!(section = %artifact_type, name, key = other, "ignoring unknown spec key");
            }
        }
    }

    Ok(spec)
}

fn parse_args(
    artifact_type: ArtifactType,
    name: &str,
    items: &[Value],
) -> Result<Vec<Arg>, ExpandError> {
    items
        .iter()
        .map(|item| parse_arg(artifact_type, name, item))
        .collect()
}

/// One argument node
///
/// - `"name"` → value object, unless it contains `\` or `::` (external type)
/// - `{name: scalar}` → scalar argument
/// - `{name: x, type: tag}` → artifact reference (`interface: true` for its interface)
pub fn parse_arg(artifact_type: ArtifactType, name: &str, node: &Value) -> Result<Arg, ExpandError> {
    match node {
        Value::String(s) if s.contains('\\') || s.contains("::") => Ok(Arg::external(s.clone())),
        Value::String(s) => Ok(Arg::value_object(s.clone())),
        Value::Object(map) if map.contains_key("type") && map.contains_key("name") => {
            let target = expect_string(artifact_type, name, "name", &map["name"])?;
            let tag = expect_string(artifact_type, name, "type", &map["type"])?;
            let target_type = tag.parse::<ArtifactType>().map_err(|e| {
                invalid(artifact_type, name, format!("argument '{}': {}", target, e))
            })?;
            let interface = matches!(map.get("interface"), Some(Value::Bool(true)));
            Ok(if interface {
                Arg::interface(target, target_type)
            } else {
                Arg::artifact(target, target_type)
            })
        }
        Value::Object(map) if map.len() == 1 => {
            let Some((arg_name, scalar)) = map.iter().next() else {
                return Err(invalid(artifact_type, name, "empty argument".to_string()));
            };
            let scalar = match scalar {
                Value::String(s) => s.parse::<ScalarType>().ok(),
                _ => None,
            }
            .ok_or_else(|| {
                invalid(
                    artifact_type,
                    name,
                    format!("argument '{}' must name a scalar type", arg_name),
                )
            })?;
            Ok(Arg::scalar(arg_name.clone(), scalar))
        }
        other => Err(invalid(
            artifact_type,
            name,
            format!("unexpected {} in args", node_kind(other)),
        )),
    }
}

fn parse_method_names(
    artifact_type: ArtifactType,
    name: &str,
    items: &[Value],
) -> Result<BTreeMap<String, MethodSpec>, ExpandError> {
    items
        .iter()
        .map(|item| match item {
            Value::String(method) => Ok((method.clone(), MethodSpec::default())),
            other => Err(invalid(
                artifact_type,
                name,
                format!("method names must be strings, found {}", node_kind(other)),
            )),
        })
        .collect()
}

fn parse_methods(
    artifact_type: ArtifactType,
    name: &str,
    node: &Value,
) -> Result<BTreeMap<String, MethodSpec>, ExpandError> {
    match node {
        Value::Array(items) => parse_method_names(artifact_type, name, items),
        Value::Object(entries) => entries
            .iter()
            .map(|(method, spec)| -> Result<(String, MethodSpec), ExpandError> {
                let parsed = match spec {
                    Value::Null => MethodSpec::default(),
                    Value::Array(items) => MethodSpec::new(parse_args(artifact_type, name, items)?, None),
                    Value::Object(map) => {
                        let args = match map.get("args") {
                            Some(args) => parse_args(
                                artifact_type,
                                name,
                                expect_list(artifact_type, name, "args", args)?,
                            )?,
                            None => Vec::new(),
                        };
                        let returns = match map.get("returns") {
                            Some(value) => Some(expect_string(artifact_type, name, "returns", value)?),
                            None => None,
                        };
                        MethodSpec { args, returns }
                    }
                    other => {
                        return Err(invalid(
                            artifact_type,
                            name,
                            format!("method '{}': unexpected {}", method, node_kind(other)),
                        ))
                    }
                };
                Ok((method.clone(), parsed))
            })
            .collect(),
        other => Err(invalid(
            artifact_type,
            name,
            format!("'methods' must be a list or map, found {}", node_kind(other)),
        )),
    }
}

fn parse_events(
    artifact_type: ArtifactType,
    name: &str,
    node: &Value,
) -> Result<BTreeMap<String, EventOutcome>, ExpandError> {
    let Value::Object(entries) = node else {
        return Err(invalid(
            artifact_type,
            name,
            format!("'event' must be a map, found {}", node_kind(node)),
        ));
    };

    entries
        .iter()
        .map(|(event, outcome)| -> Result<(String, EventOutcome), ExpandError> {
            check_name(ArtifactType::Event, event)?;
            let outcome = match outcome {
                Value::Null => EventOutcome::Args(Vec::new()),
                Value::Array(items) => EventOutcome::Args(parse_args(artifact_type, name, items)?),
                Value::String(next) => EventOutcome::Next(next.clone()),
                Value::Bool(terminal) => EventOutcome::Terminal(*terminal),
                other => {
                    return Err(invalid(
                        artifact_type,
                        name,
                        format!("event '{}': unexpected {}", event, node_kind(other)),
                    ))
                }
            };
            Ok((event.clone(), outcome))
        })
        .collect()
}

fn expect_list<'v>(
    artifact_type: ArtifactType,
    name: &str,
    key: &str,
    value: &'v Value,
) -> Result<&'v [Value], ExpandError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(invalid(
            artifact_type,
            name,
            format!("'{}' must be a list, found {}", key, node_kind(other)),
        )),
    }
}

fn expect_string(
    artifact_type: ArtifactType,
    name: &str,
    key: &str,
    value: &Value,
) -> Result<String, ExpandError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(invalid(
            artifact_type,
            name,
            format!("'{}' must be a string, found {}", key, node_kind(other)),
        )),
    }
}

fn invalid(artifact_type: ArtifactType, name: &str, message: String) -> ExpandError {
    ExpandError::InvalidSpec {
        section: artifact_type,
        name: name.to_string(),
        message,
    }
}
