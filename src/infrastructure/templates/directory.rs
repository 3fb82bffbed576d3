//! Templates loaded from a user directory

use std::path::{Path, PathBuf};

use crate::domain::ports::{Template, TemplateError, TemplateId, TemplateStore};

/// Reads `<root>/<id>.tpl` on every load
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail early when any template is missing
    pub fn check(&self) -> Result<(), TemplateError> {
        TemplateId::ALL
            .iter()
            .try_for_each(|id| self.load(*id).map(|_| ()))
    }
}

impl TemplateStore for DirectoryTemplates {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError> {
        let path = self.root.join(id.file_name());
        match std::fs::read_to_string(&path) {
            Ok(source) => Ok(Template::new(id, source)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound { id, path })
            }
            Err(source) => Err(TemplateError::Io { id, source }),
        }
    }
}
