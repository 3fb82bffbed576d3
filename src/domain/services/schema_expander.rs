//! Schema expander
//!
//! Expands one domain's compact declaration into the complete layered
//! artifact map. Runs per domain with no state carried between domains:
//!
//! 1. validate the domain name and required sections (`entity`,
//!    `value_object`, `command`)
//! 2. fill absent optional sections with empty maps (and parse every node)
//! 3. derive defaults for empty sections (projectors, read models, repositories)
//! 4. merge everything into `type -> name -> spec`, registering the interface,
//!    task and factory variants of each declaration
//! 5. partition the merged map into the four layers
//!
//! Explicit declarations always win over derivation; derivation only fires
//! when the target section is empty.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::name_resolver::{value_object_scalar_type, ResolveError, IDENTITY_KIND};
use super::spec_parser::{check_name, is_valid_name, parse_section, parse_spec};
use crate::domain::entities::{
    is_reserved_identity, repository_interface_key, Arg, ArtifactSpec, EventOutcome,
    ExpandedStructure, MethodSpec, Product, RawDomain, Schema, Section,
};
use crate::domain::value_objects::{ArtifactType, Layer, ScalarType};

/// Sections every domain must declare
pub const REQUIRED_SECTIONS: [ArtifactType; 3] = [
    ArtifactType::Entity,
    ArtifactType::ValueObject,
    ArtifactType::Command,
];

/// Sections substituted with an empty map when absent
pub const OPTIONAL_SECTIONS: [ArtifactType; 11] = [
    ArtifactType::QueryHandler,
    ArtifactType::CommandHandler,
    ArtifactType::Saga,
    ArtifactType::Projector,
    ArtifactType::Dto,
    ArtifactType::Service,
    ArtifactType::Exception,
    ArtifactType::Migrations,
    ArtifactType::Rpc,
    ArtifactType::Cli,
    ArtifactType::Rest,
];

/// External collaborators referenced by synthesized artifacts
pub const READ_MODEL_STORE: &str = "ReadModelStoreInterface";
pub const EVENT_STORE: &str = "EventStore";
pub const EVENT_BUS: &str = "EventBus";
pub const COMMAND_BUS: &str = "CommandBus";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("domain '{domain}' is missing required section '{section}'")]
    MissingSection {
        domain: String,
        section: ArtifactType,
    },

    #[error("{domain}: {referenced_by} references {section} '{reference}', which is not declared")]
    UnresolvedReference {
        domain: String,
        reference: String,
        section: ArtifactType,
        referenced_by: String,
    },

    #[error("invalid domain name '{0}': names may only contain letters, digits, '_' and '-'")]
    InvalidDomainName(String),

    #[error("invalid {section} '{name}': {message}")]
    InvalidSpec {
        section: ArtifactType,
        name: String,
        message: String,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Parsed declaration of one domain, every known section present
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainDeclaration {
    pub name: String,
    sections: BTreeMap<ArtifactType, Section>,
    /// Sections synthesized by [`derive_defaults`]
    derived: BTreeSet<ArtifactType>,
}

impl DomainDeclaration {
    pub fn section(&self, artifact_type: ArtifactType) -> Option<&Section> {
        self.sections.get(&artifact_type)
    }

    /// Section contents, empty when the section is absent
    pub fn entries(
        &self,
        artifact_type: ArtifactType,
    ) -> impl Iterator<Item = (&String, &ArtifactSpec)> + '_ {
        self.sections.get(&artifact_type).into_iter().flatten()
    }

    fn is_empty(&self, artifact_type: ArtifactType) -> bool {
        self.sections
            .get(&artifact_type)
            .map_or(true, |s| s.is_empty())
    }

    fn contains(&self, artifact_type: ArtifactType, name: &str) -> bool {
        self.sections
            .get(&artifact_type)
            .is_some_and(|s| s.contains_key(name))
    }

    fn section_mut(&mut self, artifact_type: ArtifactType) -> &mut Section {
        self.sections.entry(artifact_type).or_default()
    }

    pub fn is_derived(&self, artifact_type: ArtifactType) -> bool {
        self.derived.contains(&artifact_type)
    }

    fn set_derived(&mut self, artifact_type: ArtifactType, section: Section) {
        if !section.is_empty() {
            tracing::debug!(domain = %self.name, section = %artifact_type, count = section.len(), "derived default section");
        }
        self.derived.insert(artifact_type);
        *self.section_mut(artifact_type) = section;
    }
}

/// Expand every domain of a schema, optionally restricted to one
pub fn expand_schema(
    schema: &Schema,
    only: Option<&str>,
) -> Result<Vec<ExpandedStructure>, ExpandError> {
    schema
        .domains
        .iter()
        .filter(|d| only.map_or(true, |name| d.name == name))
        .map(expand)
        .collect()
}

/// Run the whole pipeline for one domain
pub fn expand(raw: &RawDomain) -> Result<ExpandedStructure, ExpandError> {
    validate(raw)?;
    let declaration = fill_defaults(raw)?;
    let declaration = derive_defaults(declaration);
    let merged = merge(&declaration)?;
    let structure = partition(&declaration.name, merged);
    tracing::info!(domain = %raw.name, artifacts = structure.len(), "expanded domain");
    Ok(structure)
}

/// Step 1: the domain name must be path-safe and required sections present
pub fn validate(raw: &RawDomain) -> Result<(), ExpandError> {
    if !is_valid_name(&raw.name) {
        return Err(ExpandError::InvalidDomainName(raw.name.clone()));
    }
    for section in REQUIRED_SECTIONS {
        if !raw.has_section(section.as_str()) {
            return Err(ExpandError::MissingSection {
                domain: raw.name.clone(),
                section,
            });
        }
    }
    Ok(())
}

/// Step 2: parse declared sections; absent optional sections become empty
///
/// Section tags outside the closed set are rejected. The nested `repository`
/// section is split by kind; keys that are not a kind declare plain custom
/// repositories.
pub fn fill_defaults(raw: &RawDomain) -> Result<DomainDeclaration, ExpandError> {
    let mut declaration = DomainDeclaration {
        name: raw.name.clone(),
        ..DomainDeclaration::default()
    };

    for (tag, node) in &raw.sections {
        if tag == "repository" {
            fill_repositories(&mut declaration, node)?;
            continue;
        }
        let artifact_type: ArtifactType = tag.parse().map_err(ResolveError::from)?;
        let section = parse_section(artifact_type, node)?;
        declaration.section_mut(artifact_type).extend(section);
    }

    for section in OPTIONAL_SECTIONS {
        declaration.section_mut(section);
    }

    Ok(declaration)
}

fn fill_repositories(declaration: &mut DomainDeclaration, node: &Value) -> Result<(), ExpandError> {
    let entries = match node {
        Value::Null => return Ok(()),
        Value::Object(entries) => entries,
        other => {
            return Err(ExpandError::InvalidSpec {
                section: ArtifactType::Repository,
                name: String::new(),
                message: format!(
                    "section must be a map, found {}",
                    crate::domain::entities::node_kind(other)
                ),
            })
        }
    };

    for (key, value) in entries {
        match ArtifactType::from_repository_kind(key) {
            Some(kind) => {
                let section = parse_section(kind, value)?;
                declaration.section_mut(kind).extend(section);
            }
            None => {
                check_name(ArtifactType::Repository, key)?;
                let spec = parse_spec(ArtifactType::Repository, key, value)?;
                declaration
                    .section_mut(ArtifactType::Repository)
                    .insert(key.clone(), spec);
            }
        }
    }
    Ok(())
}

/// Step 3: synthesize artifacts for empty sections
pub fn derive_defaults(mut declaration: DomainDeclaration) -> DomainDeclaration {
    let entities: Vec<(String, ArtifactSpec)> = declaration
        .entries(ArtifactType::Entity)
        .map(|(name, spec)| (name.clone(), spec.clone()))
        .collect();

    if declaration.is_empty(ArtifactType::ReadModel) {
        let derived: Section = entities
            .iter()
            .map(|(entity, spec)| {
                (
                    entity.clone(),
                    ArtifactSpec::with_args(spec.args.clone()).with_entity(entity),
                )
            })
            .collect();
        declaration.set_derived(ArtifactType::ReadModel, derived);
    }

    if declaration.is_empty(ArtifactType::Projector) {
        let derived = derive_projectors(&declaration);
        declaration.set_derived(ArtifactType::Projector, derived);
    }

    if declaration.is_empty(ArtifactType::RepositoryEntityStore) {
        let derived: Section = entities
            .iter()
            .map(|(entity, _)| {
                (
                    entity.clone(),
                    ArtifactSpec::with_args(vec![Arg::external(READ_MODEL_STORE)]).with_entity(entity),
                )
            })
            .collect();
        declaration.set_derived(ArtifactType::RepositoryEntityStore, derived);
    }

    if declaration.is_empty(ArtifactType::RepositoryEventSourcingStore) {
        let derived: Section = entities
            .iter()
            .map(|(entity, _)| {
                let spec = ArtifactSpec::with_args(vec![
                    Arg::external(EVENT_STORE),
                    Arg::external(EVENT_BUS),
                    Arg::scalar("eventStreamDecorators", ScalarType::Array),
                ])
                .with_entity(entity)
                .without_interface();
                (entity.clone(), spec)
            })
            .collect();
        declaration.set_derived(ArtifactType::RepositoryEventSourcingStore, derived);
    }

    if declaration.is_empty(ArtifactType::RepositoryQueryStore) {
        let derived = derive_query_stores(&declaration);
        declaration.set_derived(ArtifactType::RepositoryQueryStore, derived);
    }

    if declaration.is_empty(ArtifactType::RepositoryReadModel) {
        let derived = derive_read_model_repositories(&declaration, &entities);
        declaration.set_derived(ArtifactType::RepositoryReadModel, derived);
    }

    declaration
}

/// One projector per entity any command is bound to, listening to every
/// event those commands emit
fn derive_projectors(declaration: &DomainDeclaration) -> Section {
    let mut events_by_entity: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (_, command) in declaration.entries(ArtifactType::Command) {
        if let Some(entity) = command.entity.as_deref() {
            events_by_entity
                .entry(entity)
                .or_default()
                .extend(command.events.keys().map(String::as_str));
        }
    }

    events_by_entity
        .into_iter()
        .map(|(entity, events)| {
            let mut spec = ArtifactSpec::with_args(vec![
                Arg::artifact(entity, ArtifactType::RepositoryEntityStore),
                Arg::artifact(entity, ArtifactType::RepositoryReadModel),
                Arg::interface("read_model", ArtifactType::Factory),
                Arg::artifact(entity, ArtifactType::RepositoryQueryStore),
                Arg::external(COMMAND_BUS),
                Arg::interface("command", ArtifactType::Factory),
            ])
            .with_entity(entity);
            spec.methods = events
                .into_iter()
                .map(|event| {
                    (
                        event.to_string(),
                        MethodSpec::new(vec![Arg::artifact(event, ArtifactType::Event)], Some("void")),
                    )
                })
                .collect();
            (entity.to_string(), spec)
        })
        .collect()
}

/// One query store per entity targeted by a query handler
fn derive_query_stores(declaration: &DomainDeclaration) -> Section {
    let mut handlers_by_entity: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (handler, spec) in declaration.entries(ArtifactType::QueryHandler) {
        if let Some(entity) = spec.entity.as_deref() {
            handlers_by_entity
                .entry(entity)
                .or_default()
                .push(handler.as_str());
        }
    }

    handlers_by_entity
        .into_iter()
        .map(|(entity, handlers)| {
            let mut spec = ArtifactSpec::with_args(vec![
                Arg::external(READ_MODEL_STORE),
                Arg::interface("read_model", ArtifactType::Factory),
                Arg::interface("value_object", ArtifactType::Factory),
            ])
            .with_entity(entity);
            spec.methods = handlers
                .into_iter()
                .map(|h| (h.to_string(), MethodSpec::default()))
                .collect();
            (entity.to_string(), spec)
        })
        .collect()
}

/// One read-model repository per entity; its methods are the command
/// handlers targeting that entity, each taking the entity's read model
fn derive_read_model_repositories(
    declaration: &DomainDeclaration,
    entities: &[(String, ArtifactSpec)],
) -> Section {
    entities
        .iter()
        .map(|(entity, _)| {
            let mut spec =
                ArtifactSpec::with_args(vec![Arg::external(READ_MODEL_STORE)]).with_entity(entity);
            spec.methods = declaration
                .entries(ArtifactType::CommandHandler)
                .filter(|(_, handler)| handler.entity.as_deref() == Some(entity.as_str()))
                .map(|(name, _)| {
                    (
                        name.clone(),
                        MethodSpec::new(
                            vec![Arg::artifact(entity.as_str(), ArtifactType::ReadModel)],
                            Some("void"),
                        ),
                    )
                })
                .collect();
            (entity.clone(), spec)
        })
        .collect()
}

/// Step 4: register every declaration and its variants in one flat map
pub fn merge(declaration: &DomainDeclaration) -> Result<BTreeMap<ArtifactType, Section>, ExpandError> {
    let mut merger = Merger::new(declaration);
    merger.value_objects()?;
    merger.entities()?;
    merger.read_models()?;
    merger.services();
    merger.commands()?;
    merger.handlers()?;
    merger.dtos();
    merger.migrations()?;
    merger.repositories()?;
    merger.check_artifact_refs()?;
    Ok(merger.merged)
}

struct Merger<'a> {
    declaration: &'a DomainDeclaration,
    merged: BTreeMap<ArtifactType, Section>,
    /// Factory families the author declared explicitly; left untouched
    explicit_factories: BTreeSet<String>,
}

impl<'a> Merger<'a> {
    fn new(declaration: &'a DomainDeclaration) -> Self {
        let merged: BTreeMap<ArtifactType, Section> = declaration
            .sections
            .iter()
            .filter(|(_, section)| !section.is_empty())
            .map(|(t, section)| (*t, section.clone()))
            .collect();
        let explicit_factories = declaration
            .entries(ArtifactType::Factory)
            .map(|(name, _)| name.clone())
            .collect();
        Self {
            declaration,
            merged,
            explicit_factories,
        }
    }

    fn section(&mut self, artifact_type: ArtifactType) -> &mut Section {
        self.merged.entry(artifact_type).or_default()
    }

    /// Register unless an explicit entry of the same identity exists
    fn register(&mut self, artifact_type: ArtifactType, name: &str, spec: ArtifactSpec) {
        self.section(artifact_type)
            .entry(name.to_string())
            .or_insert(spec);
    }

    /// Add a product to the `family` factory and its interface
    fn add_product(&mut self, family: &str, product: Product) {
        if self.explicit_factories.contains(family) {
            return;
        }
        for factory in [ArtifactType::Factory, ArtifactType::FactoryInterface] {
            self.section(factory)
                .entry(family.to_string())
                .or_default()
                .push_product(product.clone());
        }
    }

    fn unresolved(&self, reference: &str, section: ArtifactType, referenced_by: String) -> ExpandError {
        ExpandError::UnresolvedReference {
            domain: self.declaration.name.clone(),
            reference: reference.to_string(),
            section,
            referenced_by,
        }
    }

    fn check_value_objects(&self, spec: &ArtifactSpec, referenced_by: &str) -> Result<(), ExpandError> {
        for name in spec.value_object_refs() {
            if !is_reserved_identity(name)
                && !self.declaration.contains(ArtifactType::ValueObject, name)
            {
                return Err(self.unresolved(name, ArtifactType::ValueObject, referenced_by.to_string()));
            }
        }
        Ok(())
    }

    /// Every declared `{name, type}` argument must name an artifact of the
    /// merged map
    ///
    /// Runs last so synthesized entries count as declared. Synthesized
    /// sections carry fixed collaborator lists and are not checked.
    fn check_artifact_refs(&self) -> Result<(), ExpandError> {
        let sections = self
            .declaration
            .sections
            .iter()
            .filter(|(t, _)| !self.declaration.is_derived(**t));
        for (artifact_type, section) in sections {
            for (name, spec) in section {
                for (reference, target) in spec.artifact_refs() {
                    let declared = self
                        .merged
                        .get(&target)
                        .is_some_and(|s| s.contains_key(reference));
                    if !declared {
                        return Err(self.unresolved(
                            reference,
                            target,
                            format!("{}.{}", artifact_type, name),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn check_entity(&self, spec: &ArtifactSpec, referenced_by: &str) -> Result<(), ExpandError> {
        match spec.entity.as_deref() {
            Some(entity) if !self.declaration.contains(ArtifactType::Entity, entity) => {
                Err(self.unresolved(entity, ArtifactType::Entity, referenced_by.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn value_objects(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::ValueObject) {
            let mut spec = spec.clone();
            match spec.kind.as_deref() {
                Some(kind) => {
                    value_object_scalar_type(kind)?;
                }
                None if is_reserved_identity(name) => spec.kind = Some(IDENTITY_KIND.to_string()),
                None => {}
            }
            self.section(ArtifactType::ValueObject).insert(name.clone(), spec);
            self.add_product("value_object", Product::new(name, ArtifactType::ValueObject));
        }
        Ok(())
    }

    fn entities(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::Entity) {
            self.check_value_objects(spec, &format!("entity.{}", name))?;
            self.register(ArtifactType::EntityInterface, name, spec.clone());
            self.add_product("entity", Product::new(name, ArtifactType::Entity));
        }
        Ok(())
    }

    fn read_models(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::ReadModel) {
            let referenced_by = format!("read_model.{}", name);
            self.check_entity(spec, &referenced_by)?;
            self.check_value_objects(spec, &referenced_by)?;
            self.add_product("read_model", Product::new(name, ArtifactType::ReadModel));
        }
        Ok(())
    }

    fn services(&mut self) {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::Service) {
            self.register(ArtifactType::ServiceInterface, name, spec.clone());
            self.add_product("service", Product::new(name, ArtifactType::Service));
        }
    }

    fn commands(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, command) in declaration.entries(ArtifactType::Command) {
            let referenced_by = format!("command.{}", name);
            let entity = command.entity.as_deref().ok_or_else(|| ExpandError::InvalidSpec {
                section: ArtifactType::Command,
                name: name.clone(),
                message: "a command must name its entity".to_string(),
            })?;
            if !declaration.contains(ArtifactType::Entity, entity) {
                return Err(self.unresolved(entity, ArtifactType::Entity, referenced_by));
            }
            self.check_value_objects(command, &referenced_by)?;

            self.register(ArtifactType::CommandTask, name, command.clone());

            let task_repository = self
                .section(ArtifactType::RepositoryTask)
                .entry(entity.to_string())
                .or_insert_with(|| ArtifactSpec::default().with_entity(entity));
            task_repository
                .methods
                .entry(name.clone())
                .or_insert_with(|| MethodSpec::new(command.args.clone(), None));

            self.add_product("command", Product::new(name, ArtifactType::Command));
            self.add_product("command", Product::new(name, ArtifactType::CommandTask));

            for (event, outcome) in &command.events {
                let mut spec = ArtifactSpec::default().with_entity(entity);
                match outcome {
                    EventOutcome::Args(args) => spec.args = args.clone(),
                    EventOutcome::Next(next) => {
                        if !declaration.contains(ArtifactType::Command, next) {
                            return Err(self.unresolved(
                                next,
                                ArtifactType::Command,
                                format!("command.{}.event.{}", name, event),
                            ));
                        }
                        spec.args = command.args.clone();
                        spec.next_command = Some(next.clone());
                    }
                    EventOutcome::Terminal(terminal) => {
                        spec.args = command.args.clone();
                        spec.terminal = *terminal;
                    }
                }
                if let Some(existing) = self.merged.get(&ArtifactType::Event).and_then(|s| s.get(event)) {
                    if existing.entity.as_deref() != Some(entity) {
                        tracing::warn!(
                            domain = %self.declaration.name,
                            event = %event,
                            "event emitted for more than one entity; keeping the first binding"
                        );
                    }
                }
                self.register(ArtifactType::Event, event, spec);
                self.add_product("event", Product::new(event, ArtifactType::Event));
            }
        }
        Ok(())
    }

    fn handlers(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::CommandHandler) {
            self.check_entity(spec, &format!("command_handler.{}", name))?;
            self.register(ArtifactType::CommandHandlerTask, name, spec.clone());
        }
        for (name, spec) in declaration.entries(ArtifactType::QueryHandler) {
            self.check_entity(spec, &format!("query_handler.{}", name))?;
        }
        Ok(())
    }

    fn dtos(&mut self) {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::Dto) {
            self.register(ArtifactType::DtoInterface, name, spec.clone());
        }
    }

    fn migrations(&mut self) -> Result<(), ExpandError> {
        let declaration = self.declaration;
        for (name, spec) in declaration.entries(ArtifactType::Migrations) {
            self.check_value_objects(spec, &format!("migrations.{}", name))?;
        }
        Ok(())
    }

    /// Every concrete repository gets a domain interface unless suppressed
    fn repositories(&mut self) -> Result<(), ExpandError> {
        for concrete in ArtifactType::REPOSITORIES {
            let Some(section) = self.merged.get(&concrete).cloned() else {
                continue;
            };
            for (name, spec) in section {
                self.check_entity(&spec, &format!("{}.{}", concrete, name))?;
                if !spec.repository_interface {
                    continue;
                }
                let interface = ArtifactSpec {
                    args: spec.args.clone(),
                    methods: spec.methods.clone(),
                    entity: Some(spec.entity.clone().unwrap_or_else(|| name.clone())),
                    repository: Some(concrete),
                    ..ArtifactSpec::default()
                };
                self.register(
                    ArtifactType::RepositoryInterface,
                    &repository_interface_key(concrete, &name),
                    interface,
                );
            }
        }
        Ok(())
    }
}

/// Step 5: re-key the merged map by layer
pub fn partition(domain: &str, merged: BTreeMap<ArtifactType, Section>) -> ExpandedStructure {
    let mut structure = ExpandedStructure::new(domain);
    for layer in Layer::ALL {
        build_layer(&mut structure, layer, &merged);
    }
    structure
}

fn build_layer(
    structure: &mut ExpandedStructure,
    layer: Layer,
    merged: &BTreeMap<ArtifactType, Section>,
) {
    for (artifact_type, section) in merged {
        if artifact_type.layer() == layer {
            structure.insert_section(*artifact_type, section.clone());
        }
    }
}
