//! Property tests for case conversion and name resolution.

use proptest::prelude::*;

use layergen::domain::services::{
    layer_of, short_class_name, suffix_of, to_camel_case, to_underscore,
};
use layergen::ArtifactType;

/// Lowercase words of two or more letters joined by `_`
fn snake_name() -> impl Strategy<Value = String> {
    let word = proptest::string::string_regex("[a-z]{2,8}").unwrap();
    proptest::collection::vec(word, 1..=4).prop_map(|words| words.join("_"))
}

fn artifact_type() -> impl Strategy<Value = ArtifactType> {
    proptest::sample::select(ArtifactType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `to_underscore(to_camel_case(s))` returns `s` for snake-case names.
    #[test]
    fn property_camel_case_round_trips(name in snake_name()) {
        prop_assert_eq!(to_underscore(&to_camel_case(&name, "")), name);
    }

    /// PROPERTY: the same input always yields the same class name.
    #[test]
    fn property_short_class_name_is_deterministic(
        name in snake_name(),
        t in artifact_type(),
    ) {
        prop_assert_eq!(short_class_name(&name, t), short_class_name(&name, t));
    }

    /// PROPERTY: outside events and task repositories, a class name is the
    /// camel-cased name followed by the type's suffix.
    #[test]
    fn property_class_name_is_camel_plus_suffix(
        name in snake_name(),
        t in artifact_type(),
    ) {
        prop_assume!(t != ArtifactType::Event && t != ArtifactType::RepositoryTask);
        prop_assert_eq!(
            short_class_name(&name, t),
            format!("{}{}", to_camel_case(&name, ""), suffix_of(t))
        );
    }

    /// PROPERTY: event names are put in the past tense and end in `Event`.
    #[test]
    fn property_event_names_are_past_tense(name in snake_name()) {
        let class = short_class_name(&name, ArtifactType::Event);
        let stem = class.strip_suffix("Event").unwrap_or_default();
        prop_assert!(stem.ends_with('d'));
        prop_assert!(stem.starts_with(&to_camel_case(&name, "")));
    }

    /// PROPERTY: every tag in the closed set maps to exactly one layer;
    /// anything else is rejected.
    #[test]
    fn property_layer_of_matches_tag_set(tag in "[a-z_]{1,24}") {
        let known = ArtifactType::ALL.iter().find(|t| t.as_str() == tag);
        match known {
            Some(t) => prop_assert_eq!(layer_of(&tag), Ok(t.layer())),
            None => prop_assert!(layer_of(&tag).is_err()),
        }
    }
}
