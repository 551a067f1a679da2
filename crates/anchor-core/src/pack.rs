use serde::{Deserialize, Serialize};

/// An installable add-on bundle.
///
/// A Pack may carry its own rules text to be merged into the project's
/// generated documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pack {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub rules_content: Option<String>,
}

impl Pack {
    /// Whether this pack contributes rules text. Empty or whitespace-only
    /// content counts as no rules.
    pub fn has_rules(&self) -> bool {
        self.rules_content
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(rules: Option<&str>) -> Pack {
        Pack {
            name: "database-postgres".into(),
            display_name: "PostgreSQL Database".into(),
            rules_content: rules.map(String::from),
        }
    }

    #[test]
    fn has_rules_with_content() {
        assert!(pack(Some("Use the db client from lib/db.")).has_rules());
    }

    #[test]
    fn no_rules_when_absent_or_blank() {
        assert!(!pack(None).has_rules());
        assert!(!pack(Some("")).has_rules());
        assert!(!pack(Some("   \n")).has_rules());
    }
}
