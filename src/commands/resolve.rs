//! Resolve command handler

use anyhow::{Context, Result};

use layergen::domain::services::resolve;
use layergen::domain::value_objects::ArtifactType;
use layergen::presentation::output::{render_resolve, OutputFormat};

pub fn cmd_resolve(artifact_type: &str, name: &str, json: bool) -> Result<()> {
    let artifact_type: ArtifactType = artifact_type
        .parse()
        .with_context(|| format!("cannot resolve '{name}'"))?;
    let names = resolve(artifact_type, name);

    let rendered = render_resolve(&names, OutputFormat::from_json_flag(json))?;
    print!("{rendered}");
    if json {
        println!();
    }
    Ok(())
}
