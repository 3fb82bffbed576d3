//! Domain Services
//!
//! Pure logic over the domain entities. No I/O.
//!
//! - `case` - acronym-aware case conversion
//! - `name_resolver` - type tag and name to layer, namespace, class names
//! - `spec_parser` - raw schema nodes to typed specs
//! - `schema_expander` - compact declaration to the layered artifact map

pub mod case;
pub mod name_resolver;
pub mod schema_expander;
mod spec_parser;

pub use case::{to_camel_case, to_hyphenated, to_lower_camel_case, to_underscore};
pub use name_resolver::{
    layer_of, namespace_for, resolve, resolve_leaf, scalar_to_storage_type, short_class_name,
    short_interface_name, suffix_of, value_object_scalar_type, ResolveError, ResolvedNames,
    IDENTITY_KIND, VALUE_OBJECT_KINDS,
};
pub use schema_expander::{expand, expand_schema, ExpandError};
