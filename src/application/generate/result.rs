//! Generate result types

use std::path::PathBuf;

use serde::Serialize;

/// Why an artifact was not written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Target file already exists
    Exists,
    /// Another artifact of this run resolved to the same path
    Duplicate,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Exists => write!(f, "exists"),
            SkipReason::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// An artifact that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArtifact {
    /// `layer.type.name`
    pub artifact: String,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    /// Domains processed
    pub domains: Vec<String>,
    /// Files written (or that would be written in a dry run)
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_written(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    pub fn add_skipped(&mut self, artifact: String, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedArtifact {
            artifact,
            path,
            reason,
        });
    }

    /// Artifacts considered
    pub fn total_count(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    /// True when nothing had to be written
    pub fn is_up_to_date(&self) -> bool {
        self.written.is_empty()
    }
}
