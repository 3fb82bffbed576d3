//! layergen - layered DDD/CQRS skeleton generator
//!
//! A compact per-domain schema is expanded into the full set of artifacts a
//! layered architecture needs (entities, commands, handlers, events,
//! repositories, factories, read models, migrations), every artifact is given
//! its namespace and class names, and one source file is written per
//! artifact that does not exist yet.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::entities::{ExpandedStructure, RawDomain, Schema};
pub use domain::services::{expand_schema, resolve, ExpandError, ResolveError, ResolvedNames};
pub use domain::value_objects::{ArtifactType, Layer};
pub use error::{LayergenError, LayergenResult};
