//! Schema file loading
//!
//! Reads a schema document from disk and hands the domain layer a generic
//! node tree. The format follows the file extension; YAML is the default.

mod loader;

pub use loader::{load_schema, parse_schema, SchemaFormat};
