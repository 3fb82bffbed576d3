//! Concrete classes: entities, commands, events, handlers, repositories...

use crate::domain::entities::Leaf;
use crate::domain::ports::{GenerationContext, Generator, GeneratorError, TemplateId};
use crate::domain::services::{resolve, short_class_name};
use crate::domain::value_objects::ArtifactType;

use super::builder::{interface_type_of, ClassBuilder, Method};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassGenerator;

impl ClassGenerator {
    /// Interface this class implements, if one is generated for it
    fn interface(leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Option<(ArtifactType, String)> {
        let t = leaf.artifact_type;
        let exists = match t {
            t if t.is_repository() => ctx.structure.repository_interface(t, leaf.name).is_some(),
            ArtifactType::Entity | ArtifactType::Dto | ArtifactType::Service => {
                ctx.structure.contains(interface_type_of(t), leaf.name)
            }
            _ => false,
        };
        exists.then(|| (interface_type_of(t), resolve(t, leaf.name).interface_name))
    }

    fn build(leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> ClassBuilder {
        let spec = leaf.spec;
        let mut builder = ClassBuilder::new()
            .with_constructor_args(&spec.args, ctx)
            .with_methods(&spec.methods, ctx);

        if let Some((interface_type, interface)) = Self::interface(leaf, ctx) {
            builder = builder.implementing(&ctx.namespace_of(interface_type), &interface);
        }

        if let Some(next) = &spec.next_command {
            let command = short_class_name(next, ArtifactType::Command);
            builder = builder
                .with_use(format!("{}\\{}", ctx.namespace_of(ArtifactType::Command), command))
                .with_method(
                    Method::new("nextCommand", "string").with_line(format!("return {}::class;", command)),
                );
        }

        if spec.terminal {
            builder = builder.with_method(Method::new("isTerminal", "bool").with_line("return true;"));
        }

        builder
    }
}

impl Generator for ClassGenerator {
    fn name(&self) -> &'static str {
        "class"
    }

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError> {
        let template = ctx.templates.load(TemplateId::Class)?;
        let method_template = ctx.templates.load(TemplateId::Method)?;

        let vars = Self::build(leaf, ctx).class_vars(
            &ctx.qualified_namespace(),
            &ctx.names.class_name,
            "final ",
            &method_template,
        );
        Ok(template.render(&vars.to_map()))
    }
}
