//! ClassBuilder - the value threaded through one generation
//!
//! Each step takes the builder by value and returns the extended one; nothing
//! is shared between artifacts. Rendering goes through explicit template
//! variable records rather than free-form maps.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{Arg, MethodSpec};
use crate::domain::ports::{GenerationContext, Template};
use crate::domain::services::{resolve, short_class_name, to_lower_camel_case};
use crate::domain::value_objects::{ArtifactType, ScalarType};

const INDENT: &str = "    ";

/// Type hint for a scalar category
pub fn php_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "string",
        ScalarType::Int => "int",
        ScalarType::Float => "float",
        ScalarType::Bool => "bool",
        ScalarType::Array => "array",
        ScalarType::DateTime => "\\DateTimeImmutable",
    }
}

/// One typed parameter, plus the import it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub variable: String,
    /// Fully-qualified type to import, if any
    pub import: Option<String>,
}

impl Parameter {
    /// Resolve an argument against the generation context
    pub fn from_arg(arg: &Arg, ctx: &GenerationContext<'_>) -> Self {
        match arg {
            Arg::ValueObject { name } => {
                let type_name = short_class_name(name, ArtifactType::ValueObject);
                Self {
                    import: Some(format!(
                        "{}\\{}",
                        ctx.namespace_of(ArtifactType::ValueObject),
                        type_name
                    )),
                    variable: to_lower_camel_case(name),
                    type_name,
                }
            }
            Arg::Artifact {
                name,
                artifact,
                interface,
            } => {
                let names = resolve(*artifact, name);
                let (type_name, namespace) = if *interface {
                    (names.interface_name, ctx.namespace_of(interface_type_of(*artifact)))
                } else {
                    (names.class_name, ctx.namespace_of(*artifact))
                };
                Self {
                    import: Some(format!("{}\\{}", namespace, type_name)),
                    variable: to_lower_camel_case(&type_name),
                    type_name,
                }
            }
            Arg::Scalar { name, scalar } => Self {
                type_name: php_type(*scalar).to_string(),
                variable: to_lower_camel_case(name),
                import: None,
            },
            Arg::External { type_name } => {
                let short = arg.name().to_string();
                let qualified = type_name.replace("::", "\\").replace('/', "\\");
                Self {
                    variable: to_lower_camel_case(&short),
                    import: (qualified != short).then(|| qualified.trim_start_matches('\\').to_string()),
                    type_name: short,
                }
            }
        }
    }

    fn render(&self) -> String {
        format!("{} ${}", self.type_name, self.variable)
    }
}

/// The interface tag an artifact's interface lives under
pub fn interface_type_of(artifact: ArtifactType) -> ArtifactType {
    match artifact {
        ArtifactType::Entity => ArtifactType::EntityInterface,
        ArtifactType::Dto => ArtifactType::DtoInterface,
        ArtifactType::Service => ArtifactType::ServiceInterface,
        ArtifactType::Factory => ArtifactType::FactoryInterface,
        t if t.is_repository() => ArtifactType::RepositoryInterface,
        t => t,
    }
}

/// A method with its resolved signature and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub returns: String,
    /// Body lines, without indentation
    pub body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: returns.into(),
            body: Vec::new(),
        }
    }

    /// Method declared in a spec; the body is left for the author
    pub fn from_spec(name: &str, spec: &MethodSpec, ctx: &GenerationContext<'_>) -> Self {
        Self {
            name: to_lower_camel_case(name),
            parameters: spec.args.iter().map(|a| Parameter::from_arg(a, ctx)).collect(),
            returns: spec.returns.clone().unwrap_or_else(|| "void".to_string()),
            body: vec!["throw new \\LogicException('Not implemented');".to_string()],
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(Parameter::render)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn vars(&self) -> MethodTemplateVars {
        let indent = INDENT.repeat(2);
        MethodTemplateVars {
            method_name: self.name.clone(),
            parameters: self.parameter_list(),
            returns: self.returns.clone(),
            method_body: self
                .body
                .iter()
                .map(|line| format!("{}{}\n", indent, line))
                .collect(),
        }
    }

    fn signature(&self) -> String {
        format!(
            "{}public function {}({}): {};\n",
            INDENT,
            self.name,
            self.parameter_list(),
            self.returns
        )
    }
}

/// Variables of `method.tpl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTemplateVars {
    pub method_name: String,
    pub parameters: String,
    pub returns: String,
    pub method_body: String,
}

impl MethodTemplateVars {
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("method_name", self.method_name.clone()),
            ("parameters", self.parameters.clone()),
            ("returns", self.returns.clone()),
            ("method_body", self.method_body.clone()),
        ])
    }
}

/// Variables of `class.tpl` and `factory.tpl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTemplateVars {
    pub namespace: String,
    pub uses: String,
    pub modifier: String,
    pub class_name: String,
    pub implements: String,
    pub body: String,
}

impl ClassTemplateVars {
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("namespace", self.namespace.clone()),
            ("uses", self.uses.clone()),
            ("modifier", self.modifier.clone()),
            ("class_name", self.class_name.clone()),
            ("implements", self.implements.clone()),
            ("body", self.body.clone()),
        ])
    }
}

/// Variables of `interface.tpl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceTemplateVars {
    pub namespace: String,
    pub uses: String,
    pub interface_name: String,
    pub body: String,
}

impl InterfaceTemplateVars {
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("namespace", self.namespace.clone()),
            ("uses", self.uses.clone()),
            ("interface_name", self.interface_name.clone()),
            ("body", self.body.clone()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassBuilder {
    uses: BTreeSet<String>,
    implements: Vec<String>,
    constructor: Vec<Parameter>,
    methods: Vec<Method>,
}

impl ClassBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_use(mut self, qualified: impl Into<String>) -> Self {
        self.uses.insert(qualified.into());
        self
    }

    /// Implement an interface given its namespace and short name
    pub fn implementing(mut self, namespace: &str, interface: &str) -> Self {
        self.uses.insert(format!("{}\\{}", namespace, interface));
        if !self.implements.iter().any(|i| i == interface) {
            self.implements.push(interface.to_string());
        }
        self
    }

    pub fn with_constructor_arg(mut self, parameter: Parameter) -> Self {
        if let Some(import) = &parameter.import {
            self.uses.insert(import.clone());
        }
        self.constructor.push(parameter);
        self
    }

    pub fn with_constructor_args(self, args: &[Arg], ctx: &GenerationContext<'_>) -> Self {
        args.iter().fold(self, |builder, arg| {
            builder.with_constructor_arg(Parameter::from_arg(arg, ctx))
        })
    }

    pub fn with_method(mut self, method: Method) -> Self {
        for import in method.parameters.iter().filter_map(|p| p.import.as_ref()) {
            self.uses.insert(import.clone());
        }
        self.methods.push(method);
        self
    }

    pub fn with_methods<'m>(
        self,
        methods: impl IntoIterator<Item = (&'m String, &'m MethodSpec)>,
        ctx: &GenerationContext<'_>,
    ) -> Self {
        methods.into_iter().fold(self, |builder, (name, spec)| {
            builder.with_method(Method::from_spec(name, spec, ctx))
        })
    }

    pub fn uses(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(String::as_str)
    }

    pub fn constructor(&self) -> &[Parameter] {
        &self.constructor
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// `use` block, skipping imports from the artifact's own namespace
    fn render_uses(&self, namespace: &str) -> String {
        let lines: String = self
            .uses
            .iter()
            .filter(|u| u.rsplit_once('\\').map(|(ns, _)| ns) != Some(namespace))
            .map(|u| format!("use {};\n", u))
            .collect();
        if lines.is_empty() {
            lines
        } else {
            format!("\n{}", lines)
        }
    }

    fn render_constructor(&self) -> Option<String> {
        if self.constructor.is_empty() {
            return None;
        }
        let params: String = self
            .constructor
            .iter()
            .map(|p| format!("{0}{0}private readonly {1},\n", INDENT, p.render()))
            .collect();
        Some(format!(
            "{0}public function __construct(\n{1}{0}) {{\n{0}}}\n",
            INDENT, params
        ))
    }

    fn render_implements(&self) -> String {
        if self.implements.is_empty() {
            String::new()
        } else {
            format!(" implements {}", self.implements.join(", "))
        }
    }

    /// Variables for a class body; methods are rendered with `method_template`
    pub fn class_vars(
        &self,
        namespace: &str,
        class_name: &str,
        modifier: &str,
        method_template: &Template,
    ) -> ClassTemplateVars {
        let blocks: Vec<String> = self
            .render_constructor()
            .into_iter()
            .chain(
                self.methods
                    .iter()
                    .map(|m| method_template.render(&m.vars().to_map())),
            )
            .collect();

        ClassTemplateVars {
            namespace: namespace.to_string(),
            uses: self.render_uses(namespace),
            modifier: modifier.to_string(),
            class_name: class_name.to_string(),
            implements: self.render_implements(),
            body: blocks.join("\n"),
        }
    }

    /// Variables for an interface body (signatures only)
    pub fn interface_vars(&self, namespace: &str, interface_name: &str) -> InterfaceTemplateVars {
        InterfaceTemplateVars {
            namespace: namespace.to_string(),
            uses: self.render_uses(namespace),
            interface_name: interface_name.to_string(),
            body: self.methods.iter().map(Method::signature).collect(),
        }
    }
}
