//! Generate command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use layergen::application::GenerateOptions;
use layergen::config::Config;
use layergen::infrastructure::load_schema;
use layergen::presentation::factory::create_generate_use_case;
use layergen::presentation::output::{render_generate, OutputFormat};

/// Flags of `layergen generate`; unset ones fall back to the configuration
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub schema: PathBuf,
    pub output: Option<PathBuf>,
    pub root_namespace: Option<String>,
    pub templates: Option<PathBuf>,
    pub domain: Option<String>,
    pub dry_run: bool,
}

impl GenerateArgs {
    fn options(&self, config: &Config) -> GenerateOptions {
        GenerateOptions::new()
            .with_output_dir(
                self.output
                    .clone()
                    .unwrap_or_else(|| config.output.directory.clone()),
            )
            .with_extension(config.output.extension.clone())
            .with_root_namespace(
                self.root_namespace
                    .clone()
                    .unwrap_or_else(|| config.naming.root_namespace.clone()),
            )
            .with_domain(self.domain.clone())
            .with_dry_run(self.dry_run)
    }

    fn templates<'a>(&'a self, config: &'a Config) -> Option<&'a Path> {
        self.templates
            .as_deref()
            .or(config.templates.directory.as_deref())
    }
}

pub fn cmd_generate(args: &GenerateArgs, config_path: Option<&Path>, json: bool, verbose: u8) -> Result<()> {
    let config = super::load_config(config_path)?;
    let options = args.options(&config);

    let schema = load_schema(&args.schema)?;
    let use_case = create_generate_use_case(args.templates(&config))
        .context("failed to load templates")?;
    let result = use_case.execute(&schema, &options)?;

    let rendered = render_generate(&result, OutputFormat::from_json_flag(json), verbose)?;
    print!("{rendered}");
    if json {
        println!();
    }
    Ok(())
}
