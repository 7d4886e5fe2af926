// Service Definitions
//
// One registered service of the analyzed project's container.

use serde::{Deserialize, Serialize};

/// Immutable record describing a registered service.
///
/// Built by an external registry loader (the container dump format is not
/// this crate's concern; serde derives let loaders hand definitions over
/// from whatever source they parse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Service identifier, unique within its map.
    pub id: String,
    /// Fully-qualified class name of the service.
    pub class_name: String,
    /// Whether the service may be fetched by id through a generic container.
    pub is_public: bool,
    /// Synthetic services are injected into the container at runtime rather
    /// than constructed by it.
    pub is_synthetic: bool,
    /// Alias this definition was registered under, if any.
    pub alias: Option<String>,
}

impl ServiceDefinition {
    pub fn new(
        id: impl Into<String>,
        class_name: impl Into<String>,
        is_public: bool,
        is_synthetic: bool,
        alias: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            is_public,
            is_synthetic,
            alias,
        }
    }
}
