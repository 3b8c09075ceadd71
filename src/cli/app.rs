//! Main app runner for one-shot analysis

use std::env;
use std::process::ExitCode;

use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::AnalyzeTranscriptUseCase;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::domain::config::AppConfig;
use crate::infrastructure::{OpenAiCompletionClient, XdgConfigStore};

use super::args::{AnalyzeOptions, TranscriptSource};
use super::presenter::Presenter;
use super::sample::SAMPLE_TRANSCRIPT;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Errors from the analyze command
#[derive(Debug, Error)]
pub enum AnalyzeCommandError {
    #[error("Missing API key. Set OPENAI_API_KEY or run 'transcript-analyzer config set api_key <key>'")]
    MissingApiKey,

    #[error("Failed to read transcript from {origin}: {message}")]
    ReadInput { origin: String, message: String },
}

/// Run a one-shot analysis and print the result
pub async fn run_analyze(options: AnalyzeOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    match analyze(&options, &config, &mut presenter).await {
        Ok(result) => {
            if options.json {
                presenter.analysis_json(&result);
            } else {
                presenter.analysis(&result);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn analyze(
    options: &AnalyzeOptions,
    config: &AppConfig,
    presenter: &mut Presenter,
) -> Result<AnalysisResult, AnalyzeCommandError> {
    // Fail fast before waiting on stdin
    let api_key = require_api_key(config)?;
    let transcript = read_transcript(&options.source).await?;

    let client = OpenAiCompletionClient::from_config(api_key, config);
    let use_case = AnalyzeTranscriptUseCase::new(client);

    presenter.start_spinner("Analyzing transcript...");
    let result = use_case.analyze(&AnalysisRequest::new(transcript)).await;
    presenter.stop_spinner();

    Ok(result)
}

/// Get the API key from merged config
pub fn require_api_key(config: &AppConfig) -> Result<&str, AnalyzeCommandError> {
    config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(AnalyzeCommandError::MissingApiKey)
}

/// Read the transcript text from its source
pub async fn read_transcript(source: &TranscriptSource) -> Result<String, AnalyzeCommandError> {
    match source {
        TranscriptSource::Sample => Ok(SAMPLE_TRANSCRIPT.to_string()),
        TranscriptSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| AnalyzeCommandError::ReadInput {
                    origin: path.display().to_string(),
                    message: e.to_string(),
                })
        }
        TranscriptSource::Stdin => {
            let mut transcript = String::new();
            tokio::io::stdin()
                .read_to_string(&mut transcript)
                .await
                .map_err(|e| AnalyzeCommandError::ReadInput {
                    origin: "stdin".to_string(),
                    message: e.to_string(),
                })?;
            Ok(transcript)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        base_url: env::var(BASE_URL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
