//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LayergenError, LayergenResult};

use super::types::Config;

/// Project configuration file name
pub const CONFIG_FILE_NAME: &str = "layergen.toml";

/// Environment overrides
pub const ENV_OUTPUT_DIR: &str = "LAYERGEN_OUTPUT_DIR";
pub const ENV_ROOT_NAMESPACE: &str = "LAYERGEN_ROOT_NAMESPACE";
pub const ENV_TEMPLATES_DIR: &str = "LAYERGEN_TEMPLATES_DIR";
pub const ENV_EXTENSION: &str = "LAYERGEN_EXTENSION";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LayergenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LayergenError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for messages
pub fn parse_with_warnings(content: &str, path: &Path) -> LayergenResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayergenError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration from files and apply env overrides
///
/// An explicit file replaces discovery and must load. Otherwise the user
/// file is layered under `./layergen.toml`; a broken file is reported rather
/// than silently skipped.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> LayergenResult<(Config, Vec<ConfigWarning>)> {
    resolve_with_user_config(explicit, project_root, user_config_path().as_deref())
}

/// [`resolve`] with the user config location supplied by the caller
pub fn resolve_with_user_config(
    explicit: Option<&Path>,
    project_root: &Path,
    user_config: Option<&Path>,
) -> LayergenResult<(Config, Vec<ConfigWarning>)> {
    let layers: Vec<PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => [user_config.map(Path::to_path_buf), Some(project_root.join(CONFIG_FILE_NAME))]
            .into_iter()
            .flatten()
            .filter(|p| p.exists())
            .collect(),
    };

    let mut config = Config::default();
    let mut warnings = Vec::new();
    for path in &layers {
        tracing::debug!(path = %path.display(), "loading config layer");
        let (merged, layer_warnings) = merge_layer(config, path)?;
        config = merged;
        warnings.extend(layer_warnings);
    }

    Ok((with_env_overrides(config), warnings))
}

/// Lay one file over `base`
///
/// Overrides are per section: a section the file sets replaces the one below
/// it. An empty table counts as unset.
fn merge_layer(mut base: Config, path: &Path) -> LayergenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| LayergenError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let (parsed, warnings) = parse_with_warnings(&content, path)?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| LayergenError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if has_non_empty_table(&table, "output") {
        base.output = parsed.output;
    }
    if has_non_empty_table(&table, "naming") {
        base.naming = parsed.naming;
    }
    if has_non_empty_table(&table, "templates") {
        base.templates = parsed.templates;
    }
    Ok((base, warnings))
}

fn has_non_empty_table(root: &toml::Table, key: &str) -> bool {
    match root.get(key) {
        Some(toml::Value::Table(t)) => !t.is_empty(),
        Some(_) => true,
        None => false,
    }
}

/// `<config dir>/layergen/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layergen").join("config.toml"))
}

/// Apply environment variable overrides (LAYERGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = var(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
        config.output.directory = PathBuf::from(dir);
    }

    if let Some(namespace) = var(ENV_ROOT_NAMESPACE) {
        config.naming.root_namespace = namespace;
    }

    if let Some(dir) = var(ENV_TEMPLATES_DIR).filter(|v| !v.is_empty()) {
        config.templates.directory = Some(PathBuf::from(dir));
    }

    if let Some(extension) = var(ENV_EXTENSION).filter(|v| !v.is_empty()) {
        config.output.extension = extension.trim_start_matches('.').to_string();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "directory",
        "extension",
        "naming",
        "root_namespace",
        "templates",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
