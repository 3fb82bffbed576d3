//! layergen CLI - layered DDD/CQRS skeleton generator
//!
//! Usage: layergen <COMMAND>
//!
//! Commands:
//!   generate  Expand a schema and write missing artifacts
//!   expand    Print the expanded layer map
//!   resolve   Show the names an artifact resolves to

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use layergen::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            schema,
            output,
            root_namespace,
            templates,
            domain,
            dry_run,
        } => {
            let args = commands::GenerateArgs {
                schema,
                output,
                root_namespace,
                templates,
                domain,
                dry_run,
            };
            commands::cmd_generate(&args, cli.config.as_deref(), cli.json, cli.verbose)
        }
        Commands::Expand { schema, domain } => {
            commands::cmd_expand(&schema, domain.as_deref(), cli.json)
        }
        Commands::Resolve {
            artifact_type,
            name,
        } => commands::cmd_resolve(&artifact_type, &name, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
