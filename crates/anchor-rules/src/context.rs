use anchor_core::{Pack, Stack, StackSpec};

/// Everything the rules body interpolates, flattened out of the stack,
/// spec, and installed packs.
#[derive(Debug, Clone)]
pub struct RulesContext {
    pub app_name: String,
    pub app_description: String,
    pub stack_name: String,
    pub stack_version: String,
    pub stack_display_name: String,
    pub stack_id: String,
    pub packs: Vec<String>,
    pub packs_display: Vec<String>,
    pub directory_structure: Vec<String>,
    pub has_logging: bool,
    pub has_config: bool,
}

impl RulesContext {
    pub fn new(stack: &Stack, spec: &StackSpec, packs: &[Pack]) -> Self {
        Self {
            app_name: spec.app_name().to_string(),
            app_description: spec
                .description()
                .map(String::from)
                .unwrap_or_else(|| format!("A {} project", stack.display_name)),
            stack_name: stack.name.clone(),
            stack_version: stack.version.clone(),
            stack_display_name: stack.display_name.clone(),
            stack_id: stack.stack_id(),
            packs: packs.iter().map(|p| p.name.clone()).collect(),
            packs_display: packs.iter().map(|p| p.display_name.clone()).collect(),
            directory_structure: stack.directory_structure.clone(),
            has_logging: stack.builtin_features.logging,
            has_config: stack.builtin_features.config_management,
        }
    }

    /// Split the stack layout into user-editable and framework-owned
    /// directories. A path containing `lib/core` or `lib/db` counts as
    /// framework-owned; this is a substring heuristic, not access control.
    pub fn partition_directories(&self) -> (Vec<&str>, Vec<&str>) {
        let mut modifiable = Vec::new();
        let mut protected = Vec::new();
        for dir in &self.directory_structure {
            if dir.contains("lib/core") || dir.contains("lib/db") {
                protected.push(dir.as_str());
            } else {
                modifiable.push(dir.as_str());
            }
        }
        (modifiable, protected)
    }
}
