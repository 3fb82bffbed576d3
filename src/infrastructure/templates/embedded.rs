//! Built-in templates

use crate::domain::ports::{Template, TemplateError, TemplateId, TemplateStore};

const CLASS: &str = include_str!("../../../templates/class.tpl");
const INTERFACE: &str = include_str!("../../../templates/interface.tpl");
const FACTORY: &str = include_str!("../../../templates/factory.tpl");
const VALUE_OBJECT: &str = include_str!("../../../templates/value_object.tpl");
const MIGRATION: &str = include_str!("../../../templates/migration.tpl");
const METHOD: &str = include_str!("../../../templates/method.tpl");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    pub fn source(id: TemplateId) -> &'static str {
        match id {
            TemplateId::Class => CLASS,
            TemplateId::Interface => INTERFACE,
            TemplateId::Factory => FACTORY,
            TemplateId::ValueObject => VALUE_OBJECT,
            TemplateId::Migration => MIGRATION,
            TemplateId::Method => METHOD,
        }
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError> {
        Ok(Template::new(id, Self::source(id)))
    }
}
