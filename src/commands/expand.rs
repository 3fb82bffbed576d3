//! Expand command handler

use std::path::Path;

use anyhow::Result;

use layergen::domain::services::expand_schema;
use layergen::infrastructure::load_schema;
use layergen::presentation::output::{render_expand, OutputFormat};

pub fn cmd_expand(schema: &Path, domain: Option<&str>, json: bool) -> Result<()> {
    let schema = load_schema(schema)?;
    let structures = expand_schema(&schema, domain)?;

    let rendered = render_expand(&structures, OutputFormat::from_json_flag(json))?;
    print!("{rendered}");
    if json {
        println!();
    }
    Ok(())
}
