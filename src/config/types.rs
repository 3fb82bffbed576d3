//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LayergenResult;

use super::loader::{self, ConfigWarning};

/// Where and how generated files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// File extension of generated artifacts, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            extension: default_extension(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("generated")
}

fn default_extension() -> String {
    "php".to_string()
}

/// Naming configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Prefix of every generated namespace
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            root_namespace: default_root_namespace(),
        }
    }
}

fn default_root_namespace() -> String {
    "App".to_string()
}

/// Template source; built-in templates when no directory is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LayergenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LayergenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, project file, user file or defaults, then env overrides
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> LayergenResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (LAYERGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
