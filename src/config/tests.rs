//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::*;
use super::types::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.output.directory, PathBuf::from("generated"));
    assert_eq!(config.output.extension, "php");
    assert_eq!(config.naming.root_namespace, "App");
    assert_eq!(config.templates.directory, None);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[output]
directory = "src/Generated"
extension = "php"

[naming]
root_namespace = "Acme"

[templates]
directory = "templates/custom"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.output.directory, PathBuf::from("src/Generated"));
    assert_eq!(config.naming.root_namespace, "Acme");
    assert_eq!(
        config.templates.directory,
        Some(PathBuf::from("templates/custom"))
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: Config = toml::from_str("[naming]\nroot_namespace = \"Shop\"\n").unwrap();

    assert_eq!(config.naming.root_namespace, "Shop");
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn test_unknown_keys_become_warnings() {
    let toml = "[output]\ndirectry = \"out\"\n\n[colors]\nenabled = true\n";
    let (config, warnings) = parse_with_warnings(toml, Path::new("layergen.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(warnings.len(), 2);

    let typo = warnings.iter().find(|w| w.key == "directry").unwrap();
    assert_eq!(typo.line, Some(2));
    assert_eq!(typo.suggestion.as_deref(), Some("directory"));
    assert_eq!(
        typo.to_string(),
        "unknown config key 'directry' in layergen.toml:2 (did you mean 'directory'?)"
    );
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse_with_warnings("[output\n", Path::new("bad.toml")).unwrap_err();
    assert!(err.to_string().starts_with("invalid config bad.toml"));
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        vars(&[
            (ENV_OUTPUT_DIR, "build/out"),
            (ENV_ROOT_NAMESPACE, "Acme"),
            (ENV_TEMPLATES_DIR, "tpl"),
            (ENV_EXTENSION, ".hack"),
        ]),
    );

    assert_eq!(config.output.directory, PathBuf::from("build/out"));
    assert_eq!(config.naming.root_namespace, "Acme");
    assert_eq!(config.templates.directory, Some(PathBuf::from("tpl")));
    assert_eq!(config.output.extension, "hack");
}

#[test]
fn test_empty_env_values_are_ignored() {
    let config = apply_overrides(
        Config::default(),
        vars(&[(ENV_OUTPUT_DIR, ""), (ENV_EXTENSION, "")]),
    );
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_reads_the_given_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[naming]\nroot_namespace = \"Project\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[naming]\nroot_namespace = \"Explicit\"\n").unwrap();

    let (config, _) = load_with_warnings(&explicit).unwrap();
    assert_eq!(config.naming.root_namespace, "Explicit");

    let (config, _) = load_with_warnings(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config.naming.root_namespace, "Project");
}

#[test]
fn test_resolve_missing_explicit_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(resolve(Some(&missing), dir.path()).is_err());
}

#[test]
fn test_project_file_layers_over_user_file() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(
        &user,
        "[output]\ndirectory = \"from-user\"\nextension = \"inc\"\n\n[naming]\nroot_namespace = \"User\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[naming]\nroot_namespace = \"Project\"\n\n[output]\n# directory = \"ignored\"\n",
    )
    .unwrap();

    let (config, warnings) = resolve_with_user_config(None, dir.path(), Some(&user)).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.naming.root_namespace, "Project");
    // the project's empty [output] table leaves the user section in place
    assert_eq!(config.output.directory, PathBuf::from("from-user"));
    assert_eq!(config.output.extension, "inc");
}

#[test]
fn test_user_file_applies_without_project_file() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(&user, "[naming]\nroot_namespace = \"Acme\"\n").unwrap();

    let (config, _) = resolve_with_user_config(None, dir.path(), Some(&user)).unwrap();

    assert_eq!(config.naming.root_namespace, "Acme");
    assert_eq!(config.output, Config::default().output);
}

#[test]
fn test_explicit_file_skips_discovery() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(&user, "[naming]\nroot_namespace = \"User\"\n").unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nextension = \"inc\"\n").unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[output]\ndirectory = \"custom\"\n").unwrap();

    let (config, _) = resolve_with_user_config(Some(&explicit), dir.path(), Some(&user)).unwrap();

    assert_eq!(config.output.directory, PathBuf::from("custom"));
    assert_eq!(config.output.extension, "php");
    assert_eq!(config.naming.root_namespace, "App");
}

#[test]
fn test_unknown_keys_from_every_layer_are_reported() {
    let dir = tempdir().unwrap();
    let user = dir.path().join("user.toml");
    fs::write(&user, "[naming]\nroot_namespce = \"User\"\n").unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nextensoin = \"inc\"\n").unwrap();

    let (_, warnings) = resolve_with_user_config(None, dir.path(), Some(&user)).unwrap();

    let keys: Vec<&str> = warnings.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(keys, vec!["root_namespce", "extensoin"]);
}
