//! Factories and factory interfaces: one `create*` method per product

use crate::domain::entities::{Leaf, Product};
use crate::domain::ports::{GenerationContext, Generator, GeneratorError, TemplateId};
use crate::domain::services::resolve;
use crate::domain::value_objects::ArtifactType;

use super::builder::{ClassBuilder, Method, Parameter};

#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryGenerator;

impl FactoryGenerator {
    fn create_method(product: &Product, ctx: &GenerationContext<'_>) -> (Method, String) {
        let class = resolve(product.artifact, &product.name).class_name;
        let import = format!("{}\\{}", ctx.namespace_of(product.artifact), class);

        let parameters: Vec<Parameter> = ctx
            .structure
            .get(product.artifact, &product.name)
            .map(|spec| spec.args.iter().map(|a| Parameter::from_arg(a, ctx)).collect())
            .unwrap_or_default();
        let call_args = parameters
            .iter()
            .map(|p| format!("${}", p.variable))
            .collect::<Vec<_>>()
            .join(", ");

        let method = parameters.into_iter().fold(
            Method::new(format!("create{}", class), class.clone()),
            Method::with_parameter,
        );
        let method = method.with_line(format!("return new {}({});", class, call_args));
        (method, import)
    }

    fn build(leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> ClassBuilder {
        leaf.spec
            .products
            .iter()
            .fold(ClassBuilder::new(), |builder, product| {
                let (method, import) = Self::create_method(product, ctx);
                builder.with_use(import).with_method(method)
            })
    }
}

impl Generator for FactoryGenerator {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError> {
        let builder = Self::build(leaf, ctx);
        let namespace = ctx.qualified_namespace();

        if leaf.artifact_type == ArtifactType::FactoryInterface {
            let template = ctx.templates.load(TemplateId::Interface)?;
            let vars = builder.interface_vars(&namespace, &ctx.names.interface_name);
            return Ok(template.render(&vars.to_map()));
        }

        let template = ctx.templates.load(TemplateId::Factory)?;
        let method_template = ctx.templates.load(TemplateId::Method)?;
        let builder = if ctx.structure.contains(ArtifactType::FactoryInterface, leaf.name) {
            builder.implementing(
                &ctx.namespace_of(ArtifactType::FactoryInterface),
                &ctx.names.interface_name,
            )
        } else {
            builder
        };
        let vars = builder.class_vars(&namespace, &ctx.names.class_name, "final ", &method_template);
        Ok(template.render(&vars.to_map()))
    }
}
