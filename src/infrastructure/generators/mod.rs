//! Built-in generators
//!
//! A static table maps every artifact type to the generator responsible for
//! it. Nothing is looked up by name at runtime.

mod builder;
mod class;
mod factory;
mod interface;
mod migration;
mod value_object;

pub use builder::{
    interface_type_of, php_type, ClassBuilder, ClassTemplateVars, InterfaceTemplateVars, Method,
    MethodTemplateVars, Parameter,
};
pub use class::ClassGenerator;
pub use factory::FactoryGenerator;
pub use interface::InterfaceGenerator;
pub use migration::MigrationGenerator;
pub use value_object::ValueObjectGenerator;

use crate::domain::ports::Generator;
use crate::domain::value_objects::ArtifactType;

static CLASS: ClassGenerator = ClassGenerator;
static INTERFACE: InterfaceGenerator = InterfaceGenerator;
static FACTORY: FactoryGenerator = FactoryGenerator;
static VALUE_OBJECT: ValueObjectGenerator = ValueObjectGenerator;
static MIGRATION: MigrationGenerator = MigrationGenerator;

/// Generator registered for an artifact type
pub fn generator_for(artifact_type: ArtifactType) -> &'static dyn Generator {
    match artifact_type {
        ArtifactType::ValueObject => &VALUE_OBJECT,
        ArtifactType::Migrations => &MIGRATION,
        ArtifactType::Factory | ArtifactType::FactoryInterface => &FACTORY,
        t if t.is_interface() => &INTERFACE,
        _ => &CLASS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_generator() {
        for t in ArtifactType::ALL {
            let name = generator_for(t).name();
            let expected = match t {
                ArtifactType::ValueObject => "value_object",
                ArtifactType::Migrations => "migration",
                ArtifactType::Factory | ArtifactType::FactoryInterface => "factory",
                t if t.is_interface() => "interface",
                _ => "class",
            };
            assert_eq!(name, expected, "{}", t);
        }
    }
}

#[cfg(test)]
mod generator_tests;
