//! Interfaces: `*_interface` tags (factories excepted)

use crate::domain::entities::Leaf;
use crate::domain::ports::{GenerationContext, Generator, GeneratorError, TemplateId};

use super::builder::ClassBuilder;

#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceGenerator;

impl Generator for InterfaceGenerator {
    fn name(&self) -> &'static str {
        "interface"
    }

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError> {
        let template = ctx.templates.load(TemplateId::Interface)?;

        let vars = ClassBuilder::new()
            .with_methods(&leaf.spec.methods, ctx)
            .interface_vars(&ctx.qualified_namespace(), &ctx.names.interface_name);
        Ok(template.render(&vars.to_map()))
    }
}
