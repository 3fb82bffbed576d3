//! Scalar and storage type value objects
//!
//! Value objects resolve to one of six scalar categories; the persistence
//! layer maps those (plus the uuid identity marker) to storage type tags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scalar category a value object wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Int,
    Float,
    Bool,
    Array,
    #[serde(rename = "datetime")]
    DateTime,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::Array => "array",
            ScalarType::DateTime => "datetime",
        }
    }
}

impl FromStr for ScalarType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ScalarType::String),
            "int" => Ok(ScalarType::Int),
            "float" => Ok(ScalarType::Float),
            "bool" => Ok(ScalarType::Bool),
            "array" => Ok(ScalarType::Array),
            "datetime" => Ok(ScalarType::DateTime),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input to the storage mapping: a scalar category or the uuid identity marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSource {
    Uuid,
    Scalar(ScalarType),
}

impl From<ScalarType> for ColumnSource {
    fn from(scalar: ScalarType) -> Self {
        ColumnSource::Scalar(scalar)
    }
}

/// Persistence-layer column type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    String,
    Integer,
    Float,
    Boolean,
    Json,
    Datetime,
    UuidBinary,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::String => "string",
            StorageType::Integer => "integer",
            StorageType::Float => "float",
            StorageType::Boolean => "boolean",
            StorageType::Json => "json",
            StorageType::Datetime => "datetime",
            StorageType::UuidBinary => "uuid_binary",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
