//! Domain Layer
//!
//! Schema expansion and name resolution, free of I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - closed tag sets (Layer, ArtifactType, ScalarType)
//! - `entities/` - raw schema, artifact specs, the expanded structure
//! - `services/` - case conversion, NameResolver, SchemaExpander
//! - `ports/` - traits infrastructure implements (FileSystem, TemplateStore, Generator)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
