//! ExpandedStructure entity - the complete layered artifact map of one domain
//!
//! `Layer -> ArtifactType -> ArtifactName -> ArtifactSpec`. Built once by the
//! schema expander and read-only afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use super::spec::{ArtifactSpec, Section};
use crate::domain::value_objects::{ArtifactType, Layer};

/// Sections of one layer, keyed by artifact type
pub type LayerSections = BTreeMap<ArtifactType, Section>;

/// Key of a repository interface entry: `<concrete tag>.<name>`
pub fn repository_interface_key(concrete: ArtifactType, name: &str) -> String {
    format!("{}.{}", concrete.as_str(), name)
}

/// One `(layer, type, name, spec)` leaf of the structure
#[derive(Debug, Clone, Copy)]
pub struct Leaf<'a> {
    pub layer: Layer,
    pub artifact_type: ArtifactType,
    pub name: &'a str,
    pub spec: &'a ArtifactSpec,
}

impl Leaf<'_> {
    /// `layer.type.name`
    pub fn path(&self) -> String {
        format!("{}.{}.{}", self.layer, self.artifact_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExpandedStructure {
    #[serde(skip)]
    domain: String,
    #[serde(flatten)]
    layers: BTreeMap<Layer, LayerSections>,
}

impl ExpandedStructure {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            layers: BTreeMap::new(),
        }
    }

    /// Place a section under the layer its type belongs to
    ///
    /// Empty sections are not recorded.
    pub fn insert_section(&mut self, artifact_type: ArtifactType, section: Section) {
        if section.is_empty() {
            return;
        }
        self.layers
            .entry(artifact_type.layer())
            .or_default()
            .insert(artifact_type, section);
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn layer(&self, layer: Layer) -> Option<&LayerSections> {
        self.layers.get(&layer)
    }

    pub fn section(&self, artifact_type: ArtifactType) -> Option<&Section> {
        self.layers
            .get(&artifact_type.layer())
            .and_then(|sections| sections.get(&artifact_type))
    }

    pub fn get(&self, artifact_type: ArtifactType, name: &str) -> Option<&ArtifactSpec> {
        self.section(artifact_type).and_then(|s| s.get(name))
    }

    /// Lookup by explicit layer; `None` when the type lives in another layer
    pub fn get_in(&self, layer: Layer, artifact_type: ArtifactType, name: &str) -> Option<&ArtifactSpec> {
        self.layers
            .get(&layer)
            .and_then(|sections| sections.get(&artifact_type))
            .and_then(|section| section.get(name))
    }

    pub fn contains(&self, artifact_type: ArtifactType, name: &str) -> bool {
        self.get(artifact_type, name).is_some()
    }

    pub fn repository_interface(&self, concrete: ArtifactType, name: &str) -> Option<&ArtifactSpec> {
        self.get(
            ArtifactType::RepositoryInterface,
            &repository_interface_key(concrete, name),
        )
    }

    /// True when the `family` factory (e.g. `entity`) builds `name`
    pub fn has_factory_product(&self, factory: ArtifactType, family: &str, name: &str) -> bool {
        self.get(factory, family)
            .map(|spec| spec.products.iter().any(|p| p.name == name))
            .unwrap_or(false)
    }

    /// Every leaf, in layer → type → name order
    pub fn leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        self.layers.iter().flat_map(|(layer, sections)| {
            sections.iter().flat_map(move |(artifact_type, section)| {
                section.iter().map(move |(name, spec)| Leaf {
                    layer: *layer,
                    artifact_type: *artifact_type,
                    name: name.as_str(),
                    spec,
                })
            })
        })
    }

    pub fn len(&self) -> usize {
        self.leaves().count()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// `layer.type.name` of every leaf
    pub fn paths(&self) -> Vec<String> {
        self.leaves().map(|leaf| leaf.path()).collect()
    }
}
