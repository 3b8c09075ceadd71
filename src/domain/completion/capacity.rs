//! Capacity tier value objects

use std::fmt;

/// Model used for ordinary requests
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Model with the larger context window
pub const DEFAULT_EXPANDED_MODEL: &str = "gpt-3.5-turbo-16k";

/// User prompts longer than this many characters go to the expanded tier
pub const DEFAULT_EXPANDED_THRESHOLD: usize = 13_000;

/// Selection between the default and the expanded model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapacityTier {
    #[default]
    Default,
    Expanded,
}

impl CapacityTier {
    /// Get the string identifier for this tier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Expanded => "expanded",
        }
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Model names for each tier plus the prompt length that forces escalation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityTiers {
    default_model: String,
    expanded_model: String,
    expanded_threshold: usize,
}

impl CapacityTiers {
    pub fn new(
        default_model: impl Into<String>,
        expanded_model: impl Into<String>,
        expanded_threshold: usize,
    ) -> Self {
        Self {
            default_model: default_model.into(),
            expanded_model: expanded_model.into(),
            expanded_threshold,
        }
    }

    /// Model name for the given tier
    pub fn model_for(&self, tier: CapacityTier) -> &str {
        match tier {
            CapacityTier::Default => &self.default_model,
            CapacityTier::Expanded => &self.expanded_model,
        }
    }

    pub fn expanded_threshold(&self) -> usize {
        self.expanded_threshold
    }
}

impl Default for CapacityTiers {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_EXPANDED_MODEL, DEFAULT_EXPANDED_THRESHOLD)
    }
}
