//! Test environment for isolated layergen runs.
//!
//! Provides `TestEnv` - a temp project directory plus an isolated config
//! home, and helpers to run the layergen binary inside it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const LAYERGEN_ENV: [&str; 4] = [
    "LAYERGEN_OUTPUT_DIR",
    "LAYERGEN_ROOT_NAMESPACE",
    "LAYERGEN_TEMPLATES_DIR",
    "LAYERGEN_EXTENSION",
];

/// Result of running a layergen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    /// Working directory of every run
    pub project_root: TempDir,
    /// HOME / XDG_CONFIG_HOME, so no user config leaks in
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    /// Environment with `schema.yaml` already written
    pub fn with_schema(schema: &str) -> Self {
        let env = Self::new();
        env.write("schema.yaml", schema);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to project root
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Read a file relative to project root
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).unwrap()
    }

    /// Run layergen from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run layergen from project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_layergen"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for var in LAYERGEN_ENV {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
