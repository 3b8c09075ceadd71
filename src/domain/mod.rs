//! Domain layer - Core business logic
//!
//! Contains value objects, prompt content, output parsing and domain errors.
//! This layer has no dependencies on external systems.

pub mod analysis;
pub mod completion;
pub mod config;
pub mod error;

// Re-export common types
pub use error::*;
pub use analysis::{parse_analysis, AnalysisRequest, AnalysisResult};
pub use completion::{CapacityTier, CapacityTiers, CompletionRequest, OutputSchema};
pub use config::AppConfig;
