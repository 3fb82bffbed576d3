//! Configuration module for layergen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the command runners)
//! 2. Environment variables (LAYERGEN_*)
//! 3. Explicit `--config` file
//! 4. Project config (./layergen.toml)
//! 5. User config (<config dir>/layergen/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    apply_overrides, parse_with_warnings, user_config_path, ConfigWarning, CONFIG_FILE_NAME,
    ENV_EXTENSION, ENV_OUTPUT_DIR, ENV_ROOT_NAMESPACE, ENV_TEMPLATES_DIR,
};
pub use types::{Config, NamingConfig, OutputConfig, TemplatesConfig};
