//! Rendering tests for the built-in generators

use insta::assert_snapshot;
use serde_json::json;

use super::*;
use crate::domain::entities::{ExpandedStructure, RawDomain};
use crate::domain::ports::{GenerationContext, GeneratorError};
use crate::domain::services::{expand, resolve_leaf};
use crate::infrastructure::templates::EmbeddedTemplates;

fn user_structure() -> ExpandedStructure {
    let domain = RawDomain::new("User")
        .with_section("entity", json!({"user": ["register", "validate"]}))
        .with_section(
            "value_object",
            json!({"uuid": null, "name": "person_name", "age": "person_age", "user": null}),
        )
        .with_section(
            "command",
            json!({
                "register": {
                    "args": ["uuid", "name"],
                    "entity": "user",
                    "event": {"register": ["uuid", "name"], "close": true}
                }
            }),
        )
        .with_section(
            "migrations",
            json!({"users": ["uuid", "name", "age", {"active": "bool"}]}),
        );
    expand(&domain).unwrap()
}

fn render(structure: &ExpandedStructure, t: ArtifactType, name: &str) -> Result<String, GeneratorError> {
    let leaf = structure
        .leaves()
        .find(|l| l.artifact_type == t && l.name == name)
        .unwrap();
    let names = resolve_leaf(&leaf);
    let templates = EmbeddedTemplates::new();
    let ctx = GenerationContext {
        structure,
        names: &names,
        root_namespace: "App",
        templates: &templates,
    };
    generator_for(t).generate(&leaf, &ctx)
}


#[test]
fn entity_class() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::Entity, "user").unwrap();
    assert_snapshot!(output, @r#"
<?php

declare(strict_types=1);

namespace App\User\Domain\Entity;

use App\User\Domain\EntityInterface\UserEntityInterface;

final class UserEntity implements UserEntityInterface
{
    public function register(): void
    {
        throw new \LogicException('Not implemented');
    }

    public function validate(): void
    {
        throw new \LogicException('Not implemented');
    }
}
"#);
}

#[test]
fn entity_interface_lists_signatures() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::EntityInterface, "user").unwrap();
    assert!(output.contains("interface UserEntityInterface\n"));
    assert!(output.contains("    public function register(): void;\n"));
}

#[test]
fn command_constructor_takes_value_objects() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::Command, "register").unwrap();
    assert!(output.contains("final class RegisterCommand\n"));
    assert!(output.contains("use App\\User\\Domain\\ValueObject\\Name;\n"));
    assert!(output.contains("        private readonly Uuid $uuid,\n"));
    assert!(output.contains("        private readonly Name $name,\n"));
}

#[test]
fn terminal_event_is_marked() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::Event, "close").unwrap();
    assert!(output.contains("final class ClosedEvent\n"));
    assert!(output.contains("public function isTerminal(): bool"));
}

#[test]
fn task_repository_implements_its_interface() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::RepositoryTask, "user").unwrap();
    assert!(output.contains("namespace App\\User\\Infrastructure\\RepositoryTask;"));
    assert!(output.contains("use App\\User\\Domain\\RepositoryInterface\\UserTaskRepositoryInterface;"));
    assert!(output.contains("public function register(Uuid $uuid, Name $name): void"));
}

#[test]
fn event_sourcing_store_has_no_interface() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::RepositoryEventSourcingStore, "user").unwrap();
    assert!(!output.contains(" implements "));
    assert!(output.contains("private readonly array $eventStreamDecorators,"));
}

#[test]
fn factory_creates_each_product() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::Factory, "command").unwrap();
    assert!(output.contains("final class CommandFactory implements CommandFactoryInterface"));
    assert!(output.contains("public function createRegisterCommand(Uuid $uuid, Name $name): RegisterCommand"));
    assert!(output.contains("return new RegisterCommand($uuid, $name);"));

    let interface = render(&structure, ArtifactType::FactoryInterface, "command").unwrap();
    assert!(interface.contains("interface CommandFactoryInterface\n"));
    assert!(interface.contains("public function createRegisterCommand(Uuid $uuid, Name $name): RegisterCommand;"));
}

#[test]
fn value_object_wraps_its_scalar() {
    let structure = user_structure();
    let age = render(&structure, ArtifactType::ValueObject, "age").unwrap();
    assert!(age.contains("final class Age\n"));
    assert!(age.contains("private readonly int $value"));

    let uuid = render(&structure, ArtifactType::ValueObject, "uuid").unwrap();
    assert!(uuid.contains("private readonly string $value"));
}

#[test]
fn migration_maps_columns_to_storage_types() {
    let structure = user_structure();
    let output = render(&structure, ArtifactType::Migrations, "users").unwrap();
    assert!(output.contains("public const TABLE = 'users';"));
    assert!(output.contains(
        "        'uuid' => 'uuid_binary',\n        'name' => 'string',\n        'age' => 'integer',\n        'active' => 'boolean',\n"
    ));
}

#[test]
fn migration_rejects_artifact_columns() {
    let domain = RawDomain::new("User")
        .with_section("entity", json!({"user": []}))
        .with_section("value_object", json!({}))
        .with_section("command", json!({}))
        .with_section("migrations", json!({"bad": [{"name": "user", "type": "entity"}]}));
    let structure = expand(&domain).unwrap();

    let err = render(&structure, ArtifactType::Migrations, "bad").unwrap_err();
    assert!(matches!(err, GeneratorError::Unsupported { generator: "migration", .. }));
}
