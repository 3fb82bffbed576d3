//! Test fixtures - reusable schemas for tests.

/// One entity, one command with a list-of-args event
pub const USER_SCHEMA: &str = r#"
User:
  entity:
    user: [register, validate]
  value_object:
    process_uuid: ~
    uuid: ~
    name: person_name
    age: person_age
    user: ~
  command:
    register:
      args: [process_uuid, uuid, user]
      entity: user
      event:
        register: [process_uuid, uuid, user]
"#;

/// Two domains, for `--domain` filtering
pub const TWO_DOMAIN_SCHEMA: &str = r#"
User:
  entity:
    user: [register]
  value_object:
    uuid: ~
  command:
    register:
      args: [uuid]
      entity: user
      event:
        register: [uuid]
Billing:
  entity:
    invoice: []
  value_object: {}
  command: {}
"#;

/// Missing the required `command` section
pub const MISSING_COMMAND_SCHEMA: &str = r#"
User:
  entity:
    user: [register]
  value_object:
    uuid: ~
"#;
