//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::completion::{
    CapacityTiers, DEFAULT_EXPANDED_MODEL, DEFAULT_EXPANDED_THRESHOLD, DEFAULT_MODEL,
};

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub expanded_model: Option<String>,
    pub expanded_threshold: Option<usize>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            expanded_model: Some(DEFAULT_EXPANDED_MODEL.to_string()),
            expanded_threshold: Some(DEFAULT_EXPANDED_THRESHOLD),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            base_url: other.base_url.or(self.base_url),
            model: other.model.or(self.model),
            expanded_model: other.expanded_model.or(self.expanded_model),
            expanded_threshold: other.expanded_threshold.or(self.expanded_threshold),
        }
    }

    /// Get base URL without trailing slash, or the OpenAI default
    pub fn base_url_or_default(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get default-tier model, or the built-in default if not set
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Get expanded-tier model, or the built-in default if not set
    pub fn expanded_model_or_default(&self) -> &str {
        self.expanded_model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_EXPANDED_MODEL)
    }

    /// Get the prompt length that forces the expanded tier
    pub fn expanded_threshold_or_default(&self) -> usize {
        self.expanded_threshold.unwrap_or(DEFAULT_EXPANDED_THRESHOLD)
    }

    /// Build the capacity tiers the completion client selects between
    pub fn capacity_tiers(&self) -> CapacityTiers {
        CapacityTiers::new(
            self.model_or_default(),
            self.expanded_model_or_default(),
            self.expanded_threshold_or_default(),
        )
    }
}
