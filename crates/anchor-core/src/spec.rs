use serde::{Deserialize, Serialize};

use crate::error::SpecError;

pub const DEFAULT_STACK_VERSION: &str = "2025.1";

/// Raw, unvalidated input for building a [`StackSpec`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecInput {
    pub app_name: String,
    pub app_type: String,
    #[serde(default)]
    pub stack_version: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// A validated project specification.
///
/// Only obtainable through [`StackSpec::new`] (deserialization funnels
/// through the same path), so an instance is always normalized and valid.
/// Fields are read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SpecInput")]
pub struct StackSpec {
    app_name: String,
    app_type: String,
    stack_version: String,
    capabilities: Vec<String>,
    description: Option<String>,
    author: Option<String>,
}

impl StackSpec {
    /// Normalize and validate `input`.
    ///
    /// `app_name` and `app_type` are lower-cased; capabilities are
    /// lower-cased and de-duplicated preserving first occurrence; a missing
    /// `stack_version` defaults to [`DEFAULT_STACK_VERSION`].
    pub fn new(input: SpecInput) -> Result<Self, SpecError> {
        let app_name = input.app_name.to_lowercase();
        validate_app_name(&app_name)?;

        let mut capabilities: Vec<String> = Vec::new();
        for cap in input.capabilities {
            let cap = cap.to_lowercase();
            if !capabilities.contains(&cap) {
                capabilities.push(cap);
            }
        }

        Ok(Self {
            app_name,
            app_type: input.app_type.to_lowercase(),
            stack_version: input
                .stack_version
                .unwrap_or_else(|| DEFAULT_STACK_VERSION.to_string()),
            capabilities,
            description: input.description,
            author: input.author,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_type(&self) -> &str {
        &self.app_type
    }

    pub fn stack_version(&self) -> &str {
        &self.stack_version
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Combined stack identifier, e.g. `nextjs@2025.1`.
    pub fn stack_id(&self) -> String {
        format!("{}@{}", self.app_type, self.stack_version)
    }
}

impl TryFrom<SpecInput> for StackSpec {
    type Error = SpecError;

    fn try_from(input: SpecInput) -> Result<Self, Self::Error> {
        StackSpec::new(input)
    }
}

fn validate_app_name(name: &str) -> Result<(), SpecError> {
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(SpecError::validation(
            "app_name",
            "must start with a letter",
        ));
    }
    if name.contains("--") {
        return Err(SpecError::validation(
            "app_name",
            "must not contain consecutive hyphens",
        ));
    }
    if name.ends_with('-') {
        return Err(SpecError::validation(
            "app_name",
            "must not end with a hyphen",
        ));
    }
    Ok(())
}
