//! Domain Value Objects
//!
//! Immutable tags the rest of the generator is keyed on.

mod artifact_type;
mod layer;
mod scalar_type;

pub use artifact_type::{ArtifactType, UnknownArtifactType};
pub use layer::Layer;
pub use scalar_type::{ColumnSource, ScalarType, StorageType};
