//! Completion infrastructure module

mod openai;

pub use openai::OpenAiCompletionClient;
