//! Error types for layergen
//!
//! Uses `thiserror` for library errors. Each domain service owns a narrow
//! error enum; `LayergenError` aggregates them for callers that cross layers.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::SchemaShapeError;
use crate::domain::ports::{FsError, GeneratorError, TemplateError};
use crate::domain::services::{ExpandError, ResolveError};

/// Result type alias for layergen operations
pub type LayergenResult<T> = Result<T, LayergenError>;

/// Main error type for layergen operations
#[derive(Error, Debug)]
pub enum LayergenError {
    /// Schema file could not be read or parsed
    #[error("failed to load schema {}: {message}", .path.display())]
    SchemaLoad { path: PathBuf, message: String },

    /// Schema parsed but is not shaped `domain -> section -> ...`
    #[error("invalid schema: {0}")]
    SchemaShape(#[from] SchemaShapeError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A generator failed for one artifact
    #[error("failed to generate {artifact}: {source}")]
    Generate {
        artifact: String,
        #[source]
        source: GeneratorError,
    },

    /// Writing a generated artifact failed
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid configuration file
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
