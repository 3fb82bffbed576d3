//! Template store implementations
//!
//! - `EmbeddedTemplates` - the built-in set, compiled into the binary
//! - `DirectoryTemplates` - `<dir>/<id>.tpl` files; a missing file is fatal

mod directory;
mod embedded;

pub use directory::DirectoryTemplates;
pub use embedded::EmbeddedTemplates;
