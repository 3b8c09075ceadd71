//! Transcript analysis value objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::AnalysisParseError;

/// Summary returned when there is no transcript to analyze
pub const EMPTY_TRANSCRIPT_SUMMARY: &str = "Not enough content to summarize";

/// Summary returned when the completion service produced nothing at all
pub const UNABLE_TO_RESPOND_SUMMARY: &str = "Unable to respond to request";

/// Placeholder for fields that could not be filled in
pub const NONE_PLACEHOLDER: &str = "None";

/// Input to the transcript analyzer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisRequest {
    transcript: String,
}

impl AnalysisRequest {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Whether there is nothing worth sending to the model
    pub fn is_empty(&self) -> bool {
        self.transcript.trim().is_empty()
    }
}

/// Structured analysis of a transcript. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: String,
    pub recommendations: String,
}

impl AnalysisResult {
    pub fn new(
        summary: impl Into<String>,
        key_points: impl Into<String>,
        recommendations: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            key_points: key_points.into(),
            recommendations: recommendations.into(),
        }
    }

    /// Result for an empty transcript
    pub fn not_enough_content() -> Self {
        Self::new(EMPTY_TRANSCRIPT_SUMMARY, NONE_PLACEHOLDER, NONE_PLACEHOLDER)
    }

    /// Degraded result carrying whatever text the model returned as the summary.
    /// Falls back to a fixed placeholder when there was no text at all.
    pub fn degraded(raw: Option<&str>) -> Self {
        Self::new(
            raw.unwrap_or(UNABLE_TO_RESPOND_SUMMARY),
            NONE_PLACEHOLDER,
            NONE_PLACEHOLDER,
        )
    }
}

/// Parse model output into an [`AnalysisResult`].
///
/// The text is read as JSON5, so trailing commas, comments, single quotes and
/// unquoted keys are accepted. Non-string field values are kept as their
/// compact JSON text.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisParseError> {
    let value: Value =
        json5::from_str(text).map_err(|e| AnalysisParseError::Malformed(e.to_string()))?;

    let Value::Object(fields) = value else {
        return Err(AnalysisParseError::NotAnObject);
    };

    Ok(AnalysisResult {
        summary: field_text(&fields, "summary")?,
        key_points: field_text(&fields, "keyPoints")?,
        recommendations: field_text(&fields, "recommendations")?,
    })
}

fn field_text(fields: &Map<String, Value>, name: &'static str) -> Result<String, AnalysisParseError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(AnalysisParseError::MissingField(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
