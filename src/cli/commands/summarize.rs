//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::VideoNoteError;
use crate::summary::{Summarizer, MAX_RATIO, MIN_RATIO};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the summarize command.
pub async fn run_summarize(
    input: &Path,
    output: Option<PathBuf>,
    ratio: f64,
    settings: Settings,
) -> Result<()> {
    // Unlike generate, an out-of-range ratio is rejected here
    if !(MIN_RATIO..=MAX_RATIO).contains(&ratio) {
        let e = VideoNoteError::InvalidInput(format!(
            "Summary ratio must be between {} and {}",
            MIN_RATIO, MAX_RATIO
        ));
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let output = output.unwrap_or_else(|| super::default_output_path(input, "summary.txt"));

    Output::info("Generating note summary...");
    let transcript = tokio::fs::read_to_string(input).await?;
    let summarizer = Summarizer::new(&settings.openai_api_key, &settings.model, settings.chunk_size);

    match summarizer.summarize(&transcript, ratio).await {
        Ok(summary) => {
            tokio::fs::write(&output, summary).await?;
            Output::success(&format!("Summary written to {}", output.display()));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Summarization failed: {}", e));
            Err(e.into())
        }
    }
}
