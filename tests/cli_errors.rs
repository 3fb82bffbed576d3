mod common;

use common::*;

#[test]
fn test_missing_section_is_fatal() {
    let env = TestEnv::with_schema(MISSING_COMMAND_SCHEMA);

    let result = env.run(&["generate", "--schema", "schema.yaml"]);
    assert!(!result.success);
    assert_ne!(result.exit_code, 0);
    assert!(
        result.stderr.contains("missing required section 'command'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!env.project_path("generated").exists());
}

#[test]
fn test_unresolved_reference_is_fatal() {
    let env = TestEnv::with_schema(
        r#"
User:
  entity:
    user: []
  value_object:
    uuid: ~
  command:
    register:
      args: [uuid, email]
      entity: user
"#,
    );

    let result = env.run(&["expand", "--schema", "schema.yaml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("'email'"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_missing_schema_file() {
    let env = TestEnv::new();

    let result = env.run(&["generate", "--schema", "nope.yaml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("nope.yaml"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_malformed_yaml() {
    let env = TestEnv::with_schema("User: [unclosed");

    let result = env.run(&["expand", "--schema", "schema.yaml"]);
    assert!(!result.success);
}

#[test]
fn test_incomplete_template_directory() {
    let env = TestEnv::with_schema(USER_SCHEMA);
    env.write("tpl/class.tpl", "{class_name}");

    let result = env.run(&["generate", "--schema", "schema.yaml", "--templates", "tpl"]);
    assert!(!result.success);
    assert!(result.stderr.contains("not found"), "stderr:\n{}", result.stderr);
    assert!(!env.project_path("generated").exists());
}

#[test]
fn test_explicit_config_must_exist() {
    let env = TestEnv::with_schema(USER_SCHEMA);

    let result = env.run(&["--config", "missing.toml", "generate", "--schema", "schema.yaml"]);
    assert!(!result.success);
    assert!(result.stderr.contains("missing.toml"), "stderr:\n{}", result.stderr);
}
