//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `schema/` - schema file loading (YAML, JSON, TOML)
//! - `templates/` - embedded and directory template stores
//! - `generators/` - built-in generators and their dispatch table

pub mod fs;
pub mod generators;
pub mod schema;
pub mod templates;

// Re-export for convenience
pub use fs::LocalFs;
pub use generators::generator_for;
pub use schema::{load_schema, parse_schema, SchemaFormat};
pub use templates::{DirectoryTemplates, EmbeddedTemplates};
