//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Transcript Analyzer - AI-powered call and interview analysis
#[derive(Parser, Debug)]
#[command(name = "transcript-analyzer")]
#[command(version)]
#[command(about = "AI-powered transcript analysis: summary, key points and recommended actions")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Transcript file to analyze (reads stdin when omitted or "-")
    #[arg(value_name = "FILE", conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Analyze the built-in sample transcript
    #[arg(long)]
    pub sample: bool,

    /// Print the analysis as JSON
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Model for the default capacity tier
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model for the expanded capacity tier
    #[arg(long, value_name = "MODEL")]
    pub expanded_model: Option<String>,

    /// Log the model used and token usage
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Where the transcript comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptSource {
    Stdin,
    File(PathBuf),
    Sample,
}

impl TranscriptSource {
    /// Resolve the source from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.sample {
            return Self::Sample;
        }
        match cli.file.as_ref() {
            Some(path) if path.as_os_str() != "-" => Self::File(path.clone()),
            _ => Self::Stdin,
        }
    }
}

/// Parsed analyze options (oneshot mode)
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub source: TranscriptSource,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "base_url",
    "model",
    "expanded_model",
    "expanded_threshold",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
