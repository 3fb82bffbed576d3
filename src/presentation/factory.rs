//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::GenerateUseCase;
use crate::domain::ports::{TemplateError, TemplateStore};
use crate::infrastructure::{DirectoryTemplates, EmbeddedTemplates, LocalFs};

/// Type alias for the concrete GenerateUseCase used by the CLI
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs, Box<dyn TemplateStore>>;

/// Pick the template store: a user directory when given, else the built-ins
///
/// A directory is checked up front so a missing template fails before any
/// file is written.
pub fn create_template_store(
    directory: Option<&Path>,
) -> Result<Box<dyn TemplateStore>, TemplateError> {
    match directory {
        Some(dir) => {
            let templates = DirectoryTemplates::new(dir);
            templates.check()?;
            tracing::debug!(directory = %dir.display(), "using template directory");
            Ok(Box::new(templates))
        }
        None => Ok(Box::new(EmbeddedTemplates::new())),
    }
}

/// Create a generate use case writing to the local file system
pub fn create_generate_use_case(
    templates: Option<&Path>,
) -> Result<ConcreteGenerateUseCase, TemplateError> {
    Ok(GenerateUseCase::new(
        LocalFs::new(),
        create_template_store(templates)?,
    ))
}
