//! Transcript analysis domain module

mod analysis_prompt;
mod analysis_result;

pub use analysis_prompt::{
    analysis_output_schema, analysis_system_prompt, ANALYSIS_FIELDS, ANALYSIS_FUNCTION_NAME,
};
pub use analysis_result::{
    parse_analysis, AnalysisRequest, AnalysisResult, EMPTY_TRANSCRIPT_SUMMARY, NONE_PLACEHOLDER,
    UNABLE_TO_RESPOND_SUMMARY,
};
