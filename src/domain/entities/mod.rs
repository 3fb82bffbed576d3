//! Domain Entities
//!
//! - `schema` - the raw declaration as supplied by the author
//! - `spec` - typed per-artifact declaration nodes
//! - `structure` - the expanded, layered artifact map

mod schema;
mod spec;
mod structure;

pub use schema::{node_kind, RawDomain, Schema, SchemaShapeError};
pub use spec::{
    is_reserved_identity, Arg, ArtifactSpec, EventOutcome, MethodSpec, Product, Section,
    RESERVED_IDENTITIES,
};
pub use structure::{repository_interface_key, ExpandedStructure, LayerSections, Leaf};
