//! Property tests for schema expansion.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use layergen::domain::entities::{is_reserved_identity, RawDomain, Schema};
use layergen::{expand_schema, ArtifactType};

fn snake_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2,8}(_[a-z]{2,8}){0,2}").unwrap()
}

/// A domain with the given entities, each targeted by one command
fn domain_with(entities: &[String]) -> RawDomain {
    let mut entity_section = Map::new();
    let mut command_section = Map::new();
    for entity in entities {
        entity_section.insert(entity.clone(), json!(["change"]));
        let command = format!("change_{entity}");
        let mut event = Map::new();
        event.insert(command.clone(), json!(["uuid"]));
        command_section.insert(
            command,
            json!({"args": ["uuid"], "entity": entity, "event": event}),
        );
    }
    RawDomain::new("Prop")
        .with_section("entity", Value::Object(entity_section))
        .with_section("value_object", json!({"uuid": null}))
        .with_section("command", Value::Object(command_section))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every declared entity gets its interface, stores, read-model
    /// repository and factory product.
    #[test]
    fn property_every_entity_is_complete(
        entities in proptest::collection::btree_set(snake_name(), 1..=4),
    ) {
        let entities: Vec<String> = entities.into_iter().collect();
        prop_assume!(!entities.iter().any(|e| is_reserved_identity(e)));
        let schema = Schema { domains: vec![domain_with(&entities)] };
        let structures = expand_schema(&schema, None).unwrap();
        let structure = &structures[0];

        for entity in &entities {
            for t in [
                ArtifactType::Entity,
                ArtifactType::EntityInterface,
                ArtifactType::RepositoryEntityStore,
                ArtifactType::RepositoryEventSourcingStore,
                ArtifactType::RepositoryReadModel,
            ] {
                prop_assert!(structure.contains(t, entity), "missing {}.{}", t, entity);
            }
            prop_assert!(structure.has_factory_product(ArtifactType::Factory, "entity", entity));
        }
    }

    /// PROPERTY: expanding the same schema twice yields identical structures.
    #[test]
    fn property_expansion_is_deterministic(
        entities in proptest::collection::btree_set(snake_name(), 1..=4),
    ) {
        let entities: Vec<String> = entities.into_iter().collect();
        prop_assume!(!entities.iter().any(|e| is_reserved_identity(e)));
        let schema = Schema { domains: vec![domain_with(&entities)] };
        let first = expand_schema(&schema, None).unwrap();
        let second = expand_schema(&schema, None).unwrap();
        prop_assert_eq!(first, second);
    }
}
