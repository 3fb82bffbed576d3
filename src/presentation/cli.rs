//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Flags left unset fall back to the resolved configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// layergen - layered DDD/CQRS skeleton generator
#[derive(Parser, Debug)]
#[command(name = "layergen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./layergen.toml layered over the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a schema and write every artifact that does not exist yet
    Generate {
        /// Schema file (YAML, JSON or TOML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output directory (one subdirectory per domain)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Root namespace of generated classes
        #[arg(long)]
        root_namespace: Option<String>,

        /// Load templates from this directory instead of the built-ins
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Only generate this domain
        #[arg(short, long)]
        domain: Option<String>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the expanded layer map of a schema
    Expand {
        /// Schema file (YAML, JSON or TOML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Only expand this domain
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Show the names an artifact resolves to
    Resolve {
        /// Artifact type tag (e.g. entity, command_handler, repository_task)
        artifact_type: String,

        /// Logical artifact name (e.g. user, register)
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["layergen", "generate", "--schema", "schema.yaml"]).unwrap();
        let Commands::Generate {
            schema,
            output,
            root_namespace,
            templates,
            domain,
            dry_run,
        } = cli.command
        else {
            panic!("Expected Generate command");
        };
        assert_eq!(schema, PathBuf::from("schema.yaml"));
        assert_eq!(output, None);
        assert_eq!(root_namespace, None);
        assert_eq!(templates, None);
        assert_eq!(domain, None);
        assert!(!dry_run);
    }

    #[test]
    fn test_cli_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "layergen",
            "generate",
            "-s",
            "schema.json",
            "-o",
            "src/Generated",
            "--root-namespace",
            "Acme",
            "--domain",
            "User",
            "--dry-run",
        ])
        .unwrap();
        let Commands::Generate {
            output,
            root_namespace,
            domain,
            dry_run,
            ..
        } = cli.command
        else {
            panic!("Expected Generate command");
        };
        assert_eq!(output, Some(PathBuf::from("src/Generated")));
        assert_eq!(root_namespace.as_deref(), Some("Acme"));
        assert_eq!(domain.as_deref(), Some("User"));
        assert!(dry_run);
    }

    #[test]
    fn test_cli_generate_requires_schema() {
        assert!(Cli::try_parse_from(["layergen", "generate"]).is_err());
    }

    #[test]
    fn test_cli_parse_resolve() {
        let cli = Cli::try_parse_from(["layergen", "resolve", "command_handler", "register"]).unwrap();
        let Commands::Resolve {
            artifact_type,
            name,
        } = cli.command
        else {
            panic!("Expected Resolve command");
        };
        assert_eq!(artifact_type, "command_handler");
        assert_eq!(name, "register");
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "layergen",
            "expand",
            "--schema",
            "s.yaml",
            "--json",
            "-vv",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Expand { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["layergen"]).is_err());
    }
}
