//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod completion;
pub mod config;

// Re-export common types
pub use completion::{CompletionClient, CompletionError};
pub use config::ConfigStore;
