//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain naming or expansion rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Expands a schema and writes one file per artifact

pub mod generate;

pub use generate::{
    target_path, GenerateOptions, GenerateResult, GenerateUseCase, SkipReason, SkippedArtifact,
};
