//! video-note CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use video_note::cli::{commands, Cli, Commands};
use video_note::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("video_note={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => {
            let path = Settings::expand_path(path);
            Settings::load_from(Some(&path))?
        }
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Generate { input, output, ratio } => {
            commands::run_generate(input, output.clone(), *ratio, settings).await?;
        }

        Commands::Transcribe { input, output } => {
            commands::run_transcribe(input, output.clone(), settings).await?;
        }

        Commands::Summarize { input, output, ratio } => {
            commands::run_summarize(input, output.clone(), *ratio, settings).await?;
        }
    }

    Ok(())
}
