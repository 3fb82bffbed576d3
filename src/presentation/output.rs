//! Output Rendering
//!
//! Every command renders to a string in one of two formats; the runner
//! prints it to stdout. Logs go to stderr, so JSON output stays parseable.

use serde_json::Value;

use crate::application::GenerateResult;
use crate::domain::entities::ExpandedStructure;
use crate::domain::services::ResolvedNames;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    write: &'static str,
    skip: &'static str,
}

const ICONS: Icons = Icons {
    check: "✓",
    write: "→",
    skip: "○",
};

/// Render the outcome of `generate`
///
/// Skipped targets are only listed in text mode when `verbose` is set.
pub fn render_generate(
    result: &GenerateResult,
    format: OutputFormat,
    verbose: u8,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{:#}", serde_json::to_value(result)?));
    }

    let mut out = String::new();
    let heading = match (result.dry_run, result.is_up_to_date()) {
        (_, true) => "Already Up-to-date",
        (true, false) => "Dry Run Complete",
        (false, false) => "Generate Complete",
    };
    out.push_str(&format!("{} {}\n\n", ICONS.check, heading));
    out.push_str(&format!("  Domains: {}\n", result.domains.join(", ")));
    out.push_str(&format!(
        "  {} written, {} skipped\n",
        result.written.len(),
        result.skipped.len()
    ));

    if !result.written.is_empty() {
        let label = if result.dry_run { "Would write" } else { "Written" };
        out.push_str(&format!("\n  {} ({}):\n", label, result.written.len()));
        for path in &result.written {
            out.push_str(&format!("    {} {}\n", ICONS.write, path.display()));
        }
    }

    if !result.skipped.is_empty() && verbose > 0 {
        out.push_str(&format!("\n  Skipped ({}):\n", result.skipped.len()));
        for skipped in &result.skipped {
            out.push_str(&format!(
                "    {} {} ({})\n",
                ICONS.skip,
                skipped.path.display(),
                skipped.reason
            ));
        }
    }

    Ok(out)
}

/// Render expanded structures as `layer.type.name` lines or a JSON object
/// keyed by domain
pub fn render_expand(
    structures: &[ExpandedStructure],
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        let mut domains = serde_json::Map::new();
        for structure in structures {
            domains.insert(structure.domain().to_string(), serde_json::to_value(structure)?);
        }
        return Ok(format!("{:#}", Value::Object(domains)));
    }

    let mut out = String::new();
    for structure in structures {
        out.push_str(&format!("# {}\n", structure.domain()));
        for path in structure.paths() {
            out.push_str(&path);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render resolved names of a single artifact
pub fn render_resolve(names: &ResolvedNames, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return Ok(format!("{:#}", serde_json::to_value(names)?));
    }

    let interface = if names.artifact_type.is_interface() || names.interface_name.is_empty() {
        "-".to_string()
    } else {
        names.interface_name.clone()
    };
    let rows = [
        ("layer", names.layer.as_str()),
        ("namespace", names.namespace.as_str()),
        ("class", names.class_name.as_str()),
        ("interface", interface.as_str()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<10} {}\n", label, value));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SkipReason;
    use crate::domain::services::resolve;
    use crate::domain::value_objects::ArtifactType;
    use std::path::PathBuf;

    fn sample_result() -> GenerateResult {
        let mut result = GenerateResult::new();
        result.domains.push("User".to_string());
        result.add_written(PathBuf::from("generated/User/Domain/Entity/UserEntity.php"));
        result.add_skipped(
            "domain.value_object.name".to_string(),
            PathBuf::from("generated/User/Domain/ValueObject/Name.php"),
            SkipReason::Exists,
        );
        result
    }

    #[test]
    fn text_generate_hides_skips_unless_verbose() {
        let quiet = render_generate(&sample_result(), OutputFormat::Text, 0).unwrap();
        assert!(quiet.contains("Generate Complete"));
        assert!(quiet.contains("1 written, 1 skipped"));
        assert!(!quiet.contains("Name.php"));

        let verbose = render_generate(&sample_result(), OutputFormat::Text, 1).unwrap();
        assert!(verbose.contains("Name.php (exists)"));
    }

    #[test]
    fn json_generate_is_an_object() {
        let rendered = render_generate(&sample_result(), OutputFormat::Json, 0).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["written"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["skipped"][0]["reason"], "exists");
        assert_eq!(value["dry_run"], false);
    }

    #[test]
    fn up_to_date_heading() {
        let mut result = GenerateResult::new();
        result.domains.push("User".to_string());
        let rendered = render_generate(&result, OutputFormat::Text, 0).unwrap();
        assert!(rendered.starts_with("✓ Already Up-to-date"));
    }

    #[test]
    fn text_resolve() {
        let names = resolve(ArtifactType::CommandHandler, "register");
        insta::assert_snapshot!(render_resolve(&names, OutputFormat::Text).unwrap(), @r"
        layer      application
        namespace  Application/CommandHandler
        class      RegisterHandler
        interface  RegisterHandlerInterface
        ");
    }
}
