//! ArtifactType value object - the closed set of artifact type tags
//!
//! Every tag maps to exactly one [`Layer`]. The mapping is an explicit match so
//! adding a tag without placing it in a layer fails to compile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Layer;

/// Type tag outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown artifact type '{0}'")]
pub struct UnknownArtifactType(pub String);

/// Structural type of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    Entity,
    EntityInterface,
    ValueObject,
    ReadModel,
    Command,
    CommandTask,
    CommandHandler,
    CommandHandlerTask,
    Query,
    QueryHandler,
    Event,
    Repository,
    RepositoryInterface,
    RepositoryEntityStore,
    RepositoryEventSourcingStore,
    RepositoryReadModel,
    RepositoryQueryStore,
    RepositoryTask,
    Saga,
    Projector,
    Dto,
    DtoInterface,
    Service,
    ServiceInterface,
    Factory,
    FactoryInterface,
    Exception,
    Migrations,
    Rpc,
    Cli,
    Rest,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 31] = [
        ArtifactType::Entity,
        ArtifactType::EntityInterface,
        ArtifactType::ValueObject,
        ArtifactType::ReadModel,
        ArtifactType::Command,
        ArtifactType::CommandTask,
        ArtifactType::CommandHandler,
        ArtifactType::CommandHandlerTask,
        ArtifactType::Query,
        ArtifactType::QueryHandler,
        ArtifactType::Event,
        ArtifactType::Repository,
        ArtifactType::RepositoryInterface,
        ArtifactType::RepositoryEntityStore,
        ArtifactType::RepositoryEventSourcingStore,
        ArtifactType::RepositoryReadModel,
        ArtifactType::RepositoryQueryStore,
        ArtifactType::RepositoryTask,
        ArtifactType::Saga,
        ArtifactType::Projector,
        ArtifactType::Dto,
        ArtifactType::DtoInterface,
        ArtifactType::Service,
        ArtifactType::ServiceInterface,
        ArtifactType::Factory,
        ArtifactType::FactoryInterface,
        ArtifactType::Exception,
        ArtifactType::Migrations,
        ArtifactType::Rpc,
        ArtifactType::Cli,
        ArtifactType::Rest,
    ];

    /// Concrete repository types, in the order they are derived
    pub const REPOSITORIES: [ArtifactType; 6] = [
        ArtifactType::Repository,
        ArtifactType::RepositoryEntityStore,
        ArtifactType::RepositoryEventSourcingStore,
        ArtifactType::RepositoryReadModel,
        ArtifactType::RepositoryQueryStore,
        ArtifactType::RepositoryTask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Entity => "entity",
            ArtifactType::EntityInterface => "entity_interface",
            ArtifactType::ValueObject => "value_object",
            ArtifactType::ReadModel => "read_model",
            ArtifactType::Command => "command",
            ArtifactType::CommandTask => "command_task",
            ArtifactType::CommandHandler => "command_handler",
            ArtifactType::CommandHandlerTask => "command_handler_task",
            ArtifactType::Query => "query",
            ArtifactType::QueryHandler => "query_handler",
            ArtifactType::Event => "event",
            ArtifactType::Repository => "repository",
            ArtifactType::RepositoryInterface => "repository_interface",
            ArtifactType::RepositoryEntityStore => "repository_entity_store",
            ArtifactType::RepositoryEventSourcingStore => "repository_event_sourcing_store",
            ArtifactType::RepositoryReadModel => "repository_read_model",
            ArtifactType::RepositoryQueryStore => "repository_query_store",
            ArtifactType::RepositoryTask => "repository_task",
            ArtifactType::Saga => "saga",
            ArtifactType::Projector => "projector",
            ArtifactType::Dto => "dto",
            ArtifactType::DtoInterface => "dto_interface",
            ArtifactType::Service => "service",
            ArtifactType::ServiceInterface => "service_interface",
            ArtifactType::Factory => "factory",
            ArtifactType::FactoryInterface => "factory_interface",
            ArtifactType::Exception => "exception",
            ArtifactType::Migrations => "migrations",
            ArtifactType::Rpc => "rpc",
            ArtifactType::Cli => "cli",
            ArtifactType::Rest => "rest",
        }
    }

    /// Layer this artifact type belongs to
    pub fn layer(&self) -> Layer {
        match self {
            ArtifactType::Entity
            | ArtifactType::EntityInterface
            | ArtifactType::ValueObject
            | ArtifactType::ReadModel
            | ArtifactType::Command
            | ArtifactType::CommandTask
            | ArtifactType::Event
            | ArtifactType::RepositoryInterface
            | ArtifactType::ServiceInterface
            | ArtifactType::Factory
            | ArtifactType::FactoryInterface
            | ArtifactType::Exception => Layer::Domain,

            ArtifactType::CommandHandler
            | ArtifactType::CommandHandlerTask
            | ArtifactType::Query
            | ArtifactType::QueryHandler
            | ArtifactType::Saga
            | ArtifactType::Projector
            | ArtifactType::Dto
            | ArtifactType::DtoInterface
            | ArtifactType::Service => Layer::Application,

            ArtifactType::Repository
            | ArtifactType::RepositoryEntityStore
            | ArtifactType::RepositoryEventSourcingStore
            | ArtifactType::RepositoryReadModel
            | ArtifactType::RepositoryQueryStore
            | ArtifactType::RepositoryTask
            | ArtifactType::Migrations => Layer::Infrastructure,

            ArtifactType::Rpc | ArtifactType::Cli | ArtifactType::Rest => Layer::Presentation,
        }
    }

    /// Interface artifacts are emitted under their interface name
    pub fn is_interface(&self) -> bool {
        matches!(
            self,
            ArtifactType::EntityInterface
                | ArtifactType::RepositoryInterface
                | ArtifactType::DtoInterface
                | ArtifactType::ServiceInterface
                | ArtifactType::FactoryInterface
        )
    }

    pub fn is_repository(&self) -> bool {
        Self::REPOSITORIES.contains(self)
    }

    /// Short kind name used under the schema's nested `repository` section
    pub fn repository_kind(&self) -> Option<&'static str> {
        match self {
            ArtifactType::RepositoryEntityStore => Some("entity_store"),
            ArtifactType::RepositoryEventSourcingStore => Some("event_sourcing_store"),
            ArtifactType::RepositoryReadModel => Some("read_model"),
            ArtifactType::RepositoryQueryStore => Some("query"),
            ArtifactType::RepositoryTask => Some("task"),
            _ => None,
        }
    }

    /// Inverse of [`ArtifactType::repository_kind`]; `query_store` is accepted as an alias
    pub fn from_repository_kind(kind: &str) -> Option<ArtifactType> {
        match kind {
            "entity_store" => Some(ArtifactType::RepositoryEntityStore),
            "event_sourcing_store" => Some(ArtifactType::RepositoryEventSourcingStore),
            "read_model" => Some(ArtifactType::RepositoryReadModel),
            "query" | "query_store" => Some(ArtifactType::RepositoryQueryStore),
            "task" => Some(ArtifactType::RepositoryTask),
            _ => None,
        }
    }
}

impl FromStr for ArtifactType {
    type Err = UnknownArtifactType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownArtifactType(s.to_string()))
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips_through_from_str() {
        for t in ArtifactType::ALL {
            assert_eq!(t.as_str().parse::<ArtifactType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "aggregate".parse::<ArtifactType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown artifact type 'aggregate'");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Entity".parse::<ArtifactType>().is_err());
    }

    #[test]
    fn layers_of_representative_tags() {
        assert_eq!(ArtifactType::Command.layer(), Layer::Domain);
        assert_eq!(ArtifactType::CommandHandler.layer(), Layer::Application);
        assert_eq!(ArtifactType::RepositoryTask.layer(), Layer::Infrastructure);
        assert_eq!(ArtifactType::RepositoryInterface.layer(), Layer::Domain);
        assert_eq!(ArtifactType::Rest.layer(), Layer::Presentation);
    }

    #[test]
    fn serde_matches_as_str() {
        for t in ArtifactType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn repository_kind_round_trip() {
        for t in ArtifactType::REPOSITORIES {
            if let Some(kind) = t.repository_kind() {
                assert_eq!(ArtifactType::from_repository_kind(kind), Some(t));
            }
        }
        assert_eq!(
            ArtifactType::from_repository_kind("query_store"),
            Some(ArtifactType::RepositoryQueryStore)
        );
        assert_eq!(ArtifactType::Repository.repository_kind(), None);
    }
}
