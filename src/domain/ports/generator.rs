//! Generator port - turns one structure leaf into source text
//!
//! Generators consume the resolver's output; they never decide names or
//! paths themselves.

use crate::domain::entities::{ExpandedStructure, Leaf};
use crate::domain::services::{namespace_for, ResolveError, ResolvedNames};
use crate::domain::value_objects::ArtifactType;

use super::template_store::{TemplateError, TemplateStore};

/// Everything a generator may read while producing one artifact
pub struct GenerationContext<'a> {
    pub structure: &'a ExpandedStructure,
    pub names: &'a ResolvedNames,
    /// Root namespace prefix, e.g. `App`
    pub root_namespace: &'a str,
    pub templates: &'a dyn TemplateStore,
}

impl GenerationContext<'_> {
    /// Fully-qualified namespace of the artifact being generated
    pub fn qualified_namespace(&self) -> String {
        self.qualify(&self.names.namespace)
    }

    /// Fully-qualified namespace of another artifact type in this domain
    pub fn namespace_of(&self, artifact_type: ArtifactType) -> String {
        self.qualify(&namespace_for(artifact_type))
    }

    /// `Domain/Entity` → `App\User\Domain\Entity`
    fn qualify(&self, relative: &str) -> String {
        [self.root_namespace, self.structure.domain()]
            .into_iter()
            .chain(relative.split('/'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("\\")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("{generator} cannot generate {artifact}: {message}")]
    Unsupported {
        generator: &'static str,
        artifact: String,
        message: String,
    },
}

pub trait Generator: Sync {
    /// Short identifier for logs and errors
    fn name(&self) -> &'static str;

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError>;
}
