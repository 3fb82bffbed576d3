//! Generate Use Case
//!
//! The artifact dispatcher: one generator call per leaf, write-if-absent.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{ExpandedStructure, Schema};
use crate::domain::ports::{FileSystem, GenerationContext, TemplateStore};
use crate::domain::services::{expand_schema, resolve_leaf, ResolvedNames};
use crate::error::{LayergenError, LayergenResult};
use crate::infrastructure::generators::generator_for;

use super::options::GenerateOptions;
use super::result::{GenerateResult, SkipReason};

/// `<output>/<domain>/<Layer>/<Type>/<Name>.<ext>`
pub fn target_path(options: &GenerateOptions, domain: &str, names: &ResolvedNames) -> PathBuf {
    let mut path = options.output_dir.join(domain);
    path.extend(names.namespace_segments());
    path.push(format!("{}.{}", names.emitted_name(), options.extension));
    path
}

/// Generate use case - dispatches every artifact to its generator
pub struct GenerateUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TemplateStore,
{
    fs: FS,
    templates: TS,
}

impl<FS, TS> GenerateUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TemplateStore,
{
    /// Create a new generate use case
    pub fn new(fs: FS, templates: TS) -> Self {
        Self { fs, templates }
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Expand the schema and generate every selected domain
    pub fn execute(&self, schema: &Schema, options: &GenerateOptions) -> LayergenResult<GenerateResult> {
        let structures = expand_schema(schema, options.domain.as_deref())?;
        self.generate(&structures, options)
    }

    /// Generate already-expanded structures
    ///
    /// Stops at the first generator or write error; files written before it
    /// stay on disk.
    pub fn generate(
        &self,
        structures: &[ExpandedStructure],
        options: &GenerateOptions,
    ) -> LayergenResult<GenerateResult> {
        let mut result = GenerateResult {
            dry_run: options.dry_run,
            ..GenerateResult::default()
        };
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for structure in structures {
            tracing::info!(domain = %structure.domain(), artifacts = structure.len(), "generating domain");
            result.domains.push(structure.domain().to_string());
            self.generate_domain(structure, options, &mut seen, &mut result)?;
        }

        tracing::info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            dry_run = options.dry_run,
            "generation finished"
        );
        Ok(result)
    }

    fn generate_domain(
        &self,
        structure: &ExpandedStructure,
        options: &GenerateOptions,
        seen: &mut HashSet<PathBuf>,
        result: &mut GenerateResult,
    ) -> LayergenResult<()> {
        for leaf in structure.leaves() {
            let names = resolve_leaf(&leaf);
            let path = target_path(options, structure.domain(), &names);

            if !seen.insert(path.clone()) {
                tracing::warn!(artifact = %leaf.path(), path = %path.display(), "path already generated in this run");
                result.add_skipped(leaf.path(), path, SkipReason::Duplicate);
                continue;
            }

            if self.fs.exists(&path) {
                tracing::debug!(artifact = %leaf.path(), path = %path.display(), "skipping existing artifact");
                result.add_skipped(leaf.path(), path, SkipReason::Exists);
                continue;
            }

            let ctx = GenerationContext {
                structure,
                names: &names,
                root_namespace: &options.root_namespace,
                templates: &self.templates,
            };
            let generator = generator_for(leaf.artifact_type);
            let content = generator
                .generate(&leaf, &ctx)
                .map_err(|source| LayergenError::Generate {
                    artifact: leaf.path(),
                    source,
                })?;

            if !options.dry_run {
                self.write(&path, &content)?;
            }
            tracing::debug!(artifact = %leaf.path(), generator = generator.name(), path = %path.display(), "generated");
            result.add_written(path);
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> LayergenResult<()> {
        self.fs
            .write(path, content)
            .map_err(|source| LayergenError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })
    }
}
