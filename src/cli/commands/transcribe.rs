//! Transcribe command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcription::TranscriptEngine;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the transcribe command.
pub async fn run_transcribe(
    input: &Path,
    output: Option<PathBuf>,
    settings: Settings,
) -> Result<()> {
    let output = output.unwrap_or_else(|| super::default_output_path(input, "txt"));

    Output::info("Transcribing audio...");
    let engine = TranscriptEngine::new(&settings.openai_api_key, &settings.transcription_model);

    let spinner = Output::spinner("Uploading audio for transcription...");
    match engine.transcribe_to_file(input, &output).await {
        Ok(()) => {
            spinner.finish_and_clear();
            Output::success(&format!("Transcript written to {}", output.display()));
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Transcription failed: {}", e));
            Err(e.into())
        }
    }
}
