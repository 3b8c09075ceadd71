//! OpenAI chat-completion client adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::completion::{CapacityTiers, CompletionRequest, OutputSchema};
use crate::domain::config::{AppConfig, DEFAULT_BASE_URL};

// Request types for the chat completions API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    functions: Option<[&'a OutputSchema; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionCallDirective<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct FunctionCallDirective<'a> {
    name: &'a str,
}

// Response types for the chat completions API

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    usage: Option<Usage>,
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Chat-completion client for OpenAI and compatible services
pub struct OpenAiCompletionClient {
    api_key: String,
    base_url: String,
    tiers: CapacityTiers,
    client: reqwest::Client,
}

impl OpenAiCompletionClient {
    /// Create a new client with the given API key and default models
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            tiers: CapacityTiers::default(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from merged configuration.
    /// The API key is passed separately so it is never read from global state here.
    pub fn from_config(api_key: impl Into<String>, config: &AppConfig) -> Self {
        Self::new(api_key)
            .with_base_url(config.base_url_or_default())
            .with_tiers(config.capacity_tiers())
    }

    /// Use a different API base URL (e.g. a proxy or a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use custom capacity tiers
    pub fn with_tiers(mut self, tiers: CapacityTiers) -> Self {
        self.tiers = tiers;
        self
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Build the request body for the given model
    fn build_request<'a>(
        &self,
        request: &'a CompletionRequest,
        model: &'a str,
    ) -> ChatCompletionRequest<'a> {
        let mut messages = vec![ChatMessage {
            role: "system",
            content: &request.system_prompt,
        }];
        if let Some(user_prompt) = request.user_prompt.as_deref() {
            messages.push(ChatMessage {
                role: "user",
                content: user_prompt,
            });
        }

        let schema = request.output_schema.as_ref();

        ChatCompletionRequest {
            model,
            messages,
            functions: schema.map(|s| [s]),
            function_call: schema.map(|s| FunctionCallDirective { name: &s.name }),
        }
    }

    /// Extract the result from the first choice.
    /// Structured requests read the function arguments, others the message text.
    fn extract_result(response: &ChatCompletionResponse, structured: bool) -> Option<String> {
        let message = response.choices.first()?.message.as_ref()?;

        let text = if structured {
            message.function_call.as_ref()?.arguments.as_deref()?
        } else {
            message.content.as_deref()?
        };

        if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Pull a readable message out of an error body
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string())
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let tier = request.capacity_tier(self.tiers.expanded_threshold());
        let model = self.tiers.model_for(tier);
        let body = self.build_request(request, model);

        debug!(model, %tier, "Sending chat completion request");

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CompletionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::ApiError(format!(
                "HTTP {}: {}",
                status,
                Self::error_message(&error_text)
            )));
        }

        let response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        if let Some(error) = response.error.as_ref() {
            return Err(CompletionError::ApiError(error.message.clone()));
        }

        let usage = response.usage.as_ref();
        info!(
            model = response.model.as_deref().unwrap_or(model),
            prompt_tokens = usage.map_or(0, |u| u.prompt_tokens),
            completion_tokens = usage.map_or(0, |u| u.completion_tokens),
            total_tokens = usage.map_or(0, |u| u.total_tokens),
            "Chat completion finished"
        );

        Self::extract_result(&response, request.output_schema.is_some()).ok_or_else(|| {
            let finish_reason = response
                .choices
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("unknown");
            debug!(finish_reason, "Completion carried no usable content");
            CompletionError::NoResponse
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            warn!("Unable to respond to request: {}", e);
        }
        result
    }
}
