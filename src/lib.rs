//! Transcript Analyzer - AI-powered call and interview transcript analysis
//!
//! This crate sends a conversation transcript to an OpenAI-compatible
//! chat-completion service and turns the reply into a summary, key points
//! and recommended actions.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, prompt and schema content, output parsing, errors
//! - **Application**: The analysis use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (OpenAI client, config file)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
