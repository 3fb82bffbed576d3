//! Layer value object - the four architectural layers an artifact lives in

use serde::{Deserialize, Serialize};

/// Architectural layer of a generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Entities, value objects, commands, events and the interfaces around them
    Domain,
    /// Handlers, queries, projectors, sagas and services
    Application,
    /// Repositories and migrations
    Infrastructure,
    /// RPC, CLI and REST entry points
    Presentation,
}

impl Layer {
    /// All layers, in dependency order
    pub const ALL: [Layer; 4] = [
        Layer::Domain,
        Layer::Application,
        Layer::Infrastructure,
        Layer::Presentation,
    ];

    /// Tag used in schemas and `layer.type.name` paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Application => "application",
            Layer::Infrastructure => "infrastructure",
            Layer::Presentation => "presentation",
        }
    }

    /// Top namespace segment (and directory name) for this layer
    pub fn directory_name(&self) -> &'static str {
        match self {
            Layer::Domain => "Domain",
            Layer::Application => "Application",
            Layer::Infrastructure => "Infrastructure",
            Layer::Presentation => "Presentation",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
