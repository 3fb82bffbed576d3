//! Migrations: one table, one column per argument

use std::collections::BTreeMap;

use crate::domain::entities::{is_reserved_identity, Arg, Leaf};
use crate::domain::ports::{GenerationContext, Generator, GeneratorError, TemplateId};
use crate::domain::services::{
    scalar_to_storage_type, to_underscore, value_object_scalar_type, IDENTITY_KIND,
};
use crate::domain::value_objects::{ArtifactType, ColumnSource, ScalarType, StorageType};

/// Variables of `migration.tpl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTemplateVars {
    pub namespace: String,
    pub class_name: String,
    pub table: String,
    pub columns: String,
}

impl MigrationTemplateVars {
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("namespace", self.namespace.clone()),
            ("class_name", self.class_name.clone()),
            ("table", self.table.clone()),
            ("columns", self.columns.clone()),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationGenerator;

impl MigrationGenerator {
    /// Storage type of one column
    fn column(arg: &Arg, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<StorageType, GeneratorError> {
        let source = match arg {
            Arg::ValueObject { name } => {
                let kind = ctx
                    .structure
                    .get(ArtifactType::ValueObject, name)
                    .and_then(|vo| vo.kind.as_deref());
                match kind {
                    Some(IDENTITY_KIND) => ColumnSource::Uuid,
                    None if is_reserved_identity(name) => ColumnSource::Uuid,
                    Some(kind) => ColumnSource::Scalar(value_object_scalar_type(kind)?),
                    None => ColumnSource::Scalar(ScalarType::String),
                }
            }
            Arg::Scalar { scalar, .. } => ColumnSource::Scalar(*scalar),
            Arg::Artifact { .. } | Arg::External { .. } => {
                return Err(GeneratorError::Unsupported {
                    generator: "migration",
                    artifact: leaf.path(),
                    message: format!("column '{}' is not a value object or scalar", arg.name()),
                })
            }
        };
        Ok(scalar_to_storage_type(source))
    }
}

impl Generator for MigrationGenerator {
    fn name(&self) -> &'static str {
        "migration"
    }

    fn generate(&self, leaf: &Leaf<'_>, ctx: &GenerationContext<'_>) -> Result<String, GeneratorError> {
        let columns = leaf
            .spec
            .args
            .iter()
            .map(|arg| {
                let storage = Self::column(arg, leaf, ctx)?;
                Ok(format!("        '{}' => '{}',\n", to_underscore(arg.name()), storage))
            })
            .collect::<Result<String, GeneratorError>>()?;

        let template = ctx.templates.load(TemplateId::Migration)?;
        let vars = MigrationTemplateVars {
            namespace: ctx.qualified_namespace(),
            class_name: ctx.names.class_name.clone(),
            table: to_underscore(leaf.name),
            columns,
        };
        Ok(template.render(&vars.to_map()))
    }
}
