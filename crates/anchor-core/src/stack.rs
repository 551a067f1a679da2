use serde::{Deserialize, Serialize};

/// A technology stack preset: directory layout plus built-in features.
///
/// Stacks are defined in manifests owned by the stack registry; this crate
/// only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
    pub display_name: String,
    pub version: String,
    #[serde(default)]
    pub directory_structure: Vec<String>,
    #[serde(default)]
    pub builtin_features: BuiltinFeatures,
}

/// Features a stack ships out of the box.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BuiltinFeatures {
    #[serde(default)]
    pub logging: bool,
    #[serde(default)]
    pub config_management: bool,
}

impl Stack {
    /// Combined stack identifier, e.g. `nextjs@2025.1`.
    pub fn stack_id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}
