//! Completion client port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::completion::CompletionRequest;

/// Completion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("Unable to respond to request: the service returned no content")]
    NoResponse,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl CompletionError {
    /// Whether the failure happened in transport or on the service side,
    /// as opposed to a well-formed but empty answer
    pub fn is_transport_failure(&self) -> bool {
        !matches!(self, Self::NoResponse)
    }
}

/// Port for chat-completion services
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single completion request.
    ///
    /// # Returns
    /// The function-call arguments when the request carries an output schema,
    /// otherwise the free-text content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
