//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generator;
pub mod template_store;

pub use file_system::{FileSystem, FsError, FsResult};
pub use generator::{GenerationContext, Generator, GeneratorError};
pub use template_store::{Template, TemplateError, TemplateId, TemplateStore};
