//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the OpenAI API and the config file.

pub mod completion;
pub mod config;

// Re-export adapters
pub use completion::OpenAiCompletionClient;
pub use config::XdgConfigStore;
