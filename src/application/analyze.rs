//! Analyze transcript use case

use tracing::{debug, warn};

use crate::domain::analysis::{
    analysis_output_schema, analysis_system_prompt, parse_analysis, AnalysisRequest,
    AnalysisResult,
};
use crate::domain::completion::CompletionRequest;

use super::ports::{CompletionClient, CompletionError};

/// Transcript analysis use case.
///
/// Never fails outward: every failure degrades to a populated
/// [`AnalysisResult`].
pub struct AnalyzeTranscriptUseCase<C>
where
    C: CompletionClient,
{
    client: C,
}

impl<C> AnalyzeTranscriptUseCase<C>
where
    C: CompletionClient,
{
    /// Create a new use case instance
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Analyze a transcript.
    ///
    /// Empty transcripts short-circuit without a network call. A failed first
    /// attempt is retried once at expanded capacity.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        if request.is_empty() {
            debug!("Transcript is empty, skipping analysis");
            return AnalysisResult::not_enough_content();
        }

        let completion = CompletionRequest::new(analysis_system_prompt())
            .with_user_prompt(request.transcript())
            .with_output_schema(analysis_output_schema());

        let raw = match self.client.complete(&completion).await {
            Ok(text) => Some(text),
            Err(e) => {
                log_failure("First analysis attempt failed, retrying at expanded capacity", &e);
                let retry = completion.with_expanded_capacity(true);
                match self.client.complete(&retry).await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        log_failure("Retry at expanded capacity failed", &e);
                        None
                    }
                }
            }
        };

        let Some(raw) = raw else {
            return AnalysisResult::degraded(None);
        };

        match parse_analysis(&raw) {
            Ok(result) => result,
            Err(e) => {
                warn!("Could not parse analysis output ({}): {}", e, raw);
                AnalysisResult::degraded(Some(&raw))
            }
        }
    }
}

fn log_failure(context: &str, error: &CompletionError) {
    if error.is_transport_failure() {
        warn!("{}: {}", context, error);
    } else {
        warn!("{}: empty response", context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::UNABLE_TO_RESPOND_SUMMARY;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const VALID_OUTPUT: &str =
        r#"{"summary": "A short call", "keyPoints": "● one", "recommendations": "● act"}"#;

    // Replays canned responses and records every request it sees
    struct ScriptedClient {
        responses: Mutex<VecDeque<Result<String, CompletionError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String, CompletionError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn request(&self, index: usize) -> CompletionRequest {
            self.requests.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(CompletionError::NoResponse))
        }
    }

    // Always answers with the same text
    struct FixedClient(&'static str);

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
            Ok(self.0.to_string())
        }
    }

    fn scripted(
        responses: Vec<Result<String, CompletionError>>,
    ) -> AnalyzeTranscriptUseCase<ScriptedClient> {
        AnalyzeTranscriptUseCase::new(ScriptedClient::new(responses))
    }

    #[tokio::test]
    async fn empty_transcript_skips_network() {
        let use_case = scripted(vec![Ok(VALID_OUTPUT.to_string())]);

        let result = use_case.analyze(&AnalysisRequest::new("")).await;

        assert_eq!(
            result,
            AnalysisResult::new("Not enough content to summarize", "None", "None")
        );
        assert_eq!(use_case.client.calls(), 0);
    }

    #[tokio::test]
    async fn whitespace_transcript_skips_network() {
        let use_case = scripted(vec![]);

        let result = use_case.analyze(&AnalysisRequest::new("   \n")).await;

        assert_eq!(result, AnalysisResult::not_enough_content());
        assert_eq!(use_case.client.calls(), 0);
    }

    #[tokio::test]
    async fn first_attempt_success_makes_one_call() {
        let use_case = scripted(vec![Ok(VALID_OUTPUT.to_string())]);

        let result = use_case.analyze(&AnalysisRequest::new("A: hi\nB: hello")).await;

        assert_eq!(result, AnalysisResult::new("A short call", "● one", "● act"));
        assert_eq!(use_case.client.calls(), 1);
    }

    #[tokio::test]
    async fn first_request_carries_transcript_and_schema() {
        let use_case = scripted(vec![Ok(VALID_OUTPUT.to_string())]);

        use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        let request = use_case.client.request(0);
        assert_eq!(request.system_prompt, analysis_system_prompt());
        assert_eq!(request.user_prompt.as_deref(), Some("A: hi"));
        assert_eq!(request.output_schema, Some(analysis_output_schema()));
        assert!(!request.use_expanded_capacity);
    }

    #[tokio::test]
    async fn failed_first_attempt_retries_once_expanded() {
        let use_case = scripted(vec![
            Err(CompletionError::RateLimited),
            Ok(VALID_OUTPUT.to_string()),
        ]);

        let result = use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        assert_eq!(result.summary, "A short call");
        assert_eq!(use_case.client.calls(), 2);

        let first = use_case.client.request(0);
        let retry = use_case.client.request(1);
        assert!(!first.use_expanded_capacity);
        assert!(retry.use_expanded_capacity);
        assert_eq!(first.with_expanded_capacity(true), retry);
    }

    #[tokio::test]
    async fn no_response_also_triggers_retry() {
        let use_case = scripted(vec![
            Err(CompletionError::NoResponse),
            Ok(VALID_OUTPUT.to_string()),
        ]);

        use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        assert_eq!(use_case.client.calls(), 2);
    }

    #[tokio::test]
    async fn both_attempts_failing_degrades_to_placeholder() {
        let use_case = scripted(vec![
            Err(CompletionError::RequestFailed("connection reset".into())),
            Err(CompletionError::NoResponse),
        ]);

        let result = use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        assert_eq!(result, AnalysisResult::new(UNABLE_TO_RESPOND_SUMMARY, "None", "None"));
        assert_eq!(use_case.client.calls(), 2);
    }

    #[tokio::test]
    async fn unparseable_output_becomes_summary() {
        let use_case = scripted(vec![Ok("not json".to_string())]);

        let result = use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        assert_eq!(result, AnalysisResult::new("not json", "None", "None"));
        assert_eq!(use_case.client.calls(), 1);
    }

    #[tokio::test]
    async fn wrong_shape_output_becomes_summary() {
        let raw = r#"{"summary": "only this"}"#;
        let use_case = scripted(vec![Ok(raw.to_string())]);

        let result = use_case.analyze(&AnalysisRequest::new("A: hi")).await;

        assert_eq!(result, AnalysisResult::new(raw, "None", "None"));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let use_case = AnalyzeTranscriptUseCase::new(FixedClient(VALID_OUTPUT));
        let request = AnalysisRequest::new("A: hi\nB: bye");

        let first = use_case.analyze(&request).await;
        let second = use_case.analyze(&request).await;

        assert_eq!(first, second);
    }
}
