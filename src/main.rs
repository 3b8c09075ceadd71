//! Transcript Analyzer CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transcript_analyzer::cli::{
    app::load_merged_config,
    args::{AnalyzeOptions, Cli, Commands, TranscriptSource},
    config_cmd::handle_config_command,
    presenter::Presenter,
    run_analyze, EXIT_ERROR,
};
use transcript_analyzer::domain::config::AppConfig;
use transcript_analyzer::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();

    init_logging(cli.verbose);

    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command.take() {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        model: cli.model.clone(),
        expanded_model: cli.expanded_model.clone(),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let options = AnalyzeOptions {
        source: TranscriptSource::from_cli(&cli),
        json: cli.json,
    };

    run_analyze(options, config).await
}

/// Logs go to stderr so stdout carries only the analysis.
/// RUST_LOG wins over the --verbose flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,transcript_analyzer=info"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
