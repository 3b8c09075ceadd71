//! Completion request value objects

use serde::Serialize;
use serde_json::Value;

use super::capacity::CapacityTier;

/// Function definition the completion service is forced to call.
/// `parameters` is a JSON Schema object describing the arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSchema {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names listed under `parameters.required`
    pub fn required_fields(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// A single chat-completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: Option<String>,
    pub output_schema: Option<OutputSchema>,
    pub use_expanded_capacity: bool,
}

impl CompletionRequest {
    /// Create a request with only a system prompt
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: None,
            output_schema: None,
            use_expanded_capacity: false,
        }
    }

    pub fn with_user_prompt(mut self, user_prompt: impl Into<String>) -> Self {
        self.user_prompt = Some(user_prompt.into());
        self
    }

    pub fn with_output_schema(mut self, schema: OutputSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn with_expanded_capacity(mut self, expanded: bool) -> Self {
        self.use_expanded_capacity = expanded;
        self
    }

    /// Pick the capacity tier for this request.
    ///
    /// Either trigger alone escalates: the explicit flag, or a user prompt
    /// longer than `threshold` characters.
    pub fn capacity_tier(&self, threshold: usize) -> CapacityTier {
        let oversized = self
            .user_prompt
            .as_deref()
            .is_some_and(|prompt| prompt.chars().count() > threshold);

        if self.use_expanded_capacity || oversized {
            CapacityTier::Expanded
        } else {
            CapacityTier::Default
        }
    }
}
