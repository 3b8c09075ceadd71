//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::analysis::AnalysisResult;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the analysis as titled sections
    pub fn analysis(&self, result: &AnalysisResult) {
        self.output(&Self::format_analysis(result));
    }

    /// Print the analysis as pretty JSON
    pub fn analysis_json(&self, result: &AnalysisResult) {
        match serde_json::to_string_pretty(result) {
            Ok(json) => self.output(&json),
            Err(e) => self.error(&format!("Failed to serialize analysis: {}", e)),
        }
    }

    /// Render the three analysis fields under headings
    pub fn format_analysis(result: &AnalysisResult) -> String {
        [
            ("Summary", &result.summary),
            ("Key Points", &result.key_points),
            ("Recommendations", &result.recommendations),
        ]
        .iter()
        .map(|(title, body)| format!("{}\n{}", title.bold().cyan(), body.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
