//! Generate options

use std::path::PathBuf;

/// Options for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root of the generated tree; one subdirectory per domain
    pub output_dir: PathBuf,
    /// File extension without the dot
    pub extension: String,
    /// Prefix of every generated namespace
    pub root_namespace: String,
    /// Only generate this domain
    pub domain: Option<String>,
    /// Report what would be written without touching the file system
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated"),
            extension: "php".to_string(),
            root_namespace: "App".to_string(),
            domain: None,
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    /// Create new generate options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set root namespace
    pub fn with_root_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.root_namespace = namespace.into();
        self
    }

    /// Restrict to one domain
    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
