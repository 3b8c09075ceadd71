//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the config command
//! and the one-shot analysis runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod sample;

// Re-export commonly used types
pub use app::{run_analyze, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{AnalyzeOptions, Cli, Commands, ConfigAction, TranscriptSource};
pub use presenter::Presenter;
