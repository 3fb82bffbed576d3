//! Value objects: a typed wrapper around one scalar

use std::collections::BTreeMap;

use crate::domain::entities::Leaf;
use crate::domain::ports::{GenerationContext, Generator, GeneratorError, TemplateId};
use crate::domain::services::value_object_scalar_type;
use crate::domain::value_objects::ScalarType;

use super::builder::php_type;

/// Variables of `value_object.tpl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueObjectTemplateVars {
    pub namespace: String,
    pub class_name: String,
    pub scalar_type: String,
}

impl ValueObjectTemplateVars {
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("namespace", self.namespace.clone()),
            ("class_name", self.class_name.clone()),
            ("scalar_type", self.scalar_type.clone()),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValueObjectGenerator;

impl Generator for ValueObjectGenerator {
    fn name(&self) -> &'static str {
        "value_object"
    }

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError> {
        let scalar = match leaf.spec.kind.as_deref() {
            Some(kind) => value_object_scalar_type(kind)?,
            None => ScalarType::String,
        };

        let template = ctx.templates.load(TemplateId::ValueObject)?;
        let vars = ValueObjectTemplateVars {
            namespace: ctx.qualified_namespace(),
            class_name: ctx.names.class_name.clone(),
            scalar_type: php_type(scalar).to_string(),
        };
        Ok(template.render(&vars.to_map()))
    }
}
