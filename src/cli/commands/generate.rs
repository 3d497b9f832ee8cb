//! Generate command implementation.

use crate::audio::extract_audio;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::summary::Summarizer;
use crate::transcription::TranscriptEngine;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the generate command: extract audio, transcribe, summarize.
pub async fn run_generate(
    input: &Path,
    output: Option<PathBuf>,
    ratio: f64,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Generate) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let output = output.unwrap_or_else(|| super::default_output_path(input, "txt"));

    // Intermediate files live only for the duration of this command
    let temp_dir = tempfile::tempdir()?;
    let audio_path = temp_dir.path().join("audio.mp3");
    let transcript_path = temp_dir.path().join("transcript.txt");

    Output::info("Extracting audio from video...");
    let spinner = Output::spinner("Running ffmpeg...");
    if let Err(e) = extract_audio(input, &audio_path).await {
        spinner.finish_and_clear();
        Output::error(&format!("Audio extraction failed: {}", e));
        return Err(e.into());
    }
    spinner.finish_and_clear();

    Output::info("Transcribing audio...");
    let engine = TranscriptEngine::new(&settings.openai_api_key, &settings.transcription_model);
    let spinner = Output::spinner("Uploading audio for transcription...");
    if let Err(e) = engine.transcribe_to_file(&audio_path, &transcript_path).await {
        spinner.finish_and_clear();
        Output::error(&format!("Transcription failed: {}", e));
        return Err(e.into());
    }
    spinner.finish_and_clear();

    Output::info("Generating note summary...");
    let transcript = tokio::fs::read_to_string(&transcript_path).await?;
    let summarizer = Summarizer::new(&settings.openai_api_key, &settings.model, settings.chunk_size);

    // Ratio is clamped by the summarizer for generate
    match summarizer.summarize(&transcript, ratio).await {
        Ok(summary) => {
            tokio::fs::write(&output, summary).await?;
            Output::success(&format!("Notes written to {}", output.display()));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Summarization failed: {}", e));
            Err(e.into())
        }
    }
}
