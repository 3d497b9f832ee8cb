//! Speech-to-text transcription via the OpenAI audio API.

use crate::error::{Result, VideoNoteError};
use crate::openai::create_client;
use async_openai::types::{AudioResponseFormat, CreateTranscriptionRequestArgs};
use std::path::Path;
use tracing::{debug, instrument};

/// OpenAI-backed transcription engine.
pub struct TranscriptEngine {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl TranscriptEngine {
    /// Create a new engine for the given API key and transcription model.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: create_client(api_key),
            model: model.to_string(),
        }
    }

    /// Transcribe an audio file to plain text.
    #[instrument(skip(self), fields(audio_path = %audio_path.display()))]
    pub async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        debug!("Transcribing audio with {}", self.model);

        let file_bytes = tokio::fs::read(audio_path).await?;

        let request = CreateTranscriptionRequestArgs::default()
            .file(async_openai::types::AudioInput::from_vec_u8(
                audio_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("audio.mp3")
                    .to_string(),
                file_bytes,
            ))
            .model(&self.model)
            .response_format(AudioResponseFormat::Json)
            .build()
            .map_err(|e| {
                VideoNoteError::Transcription(format!("Failed to build request: {}", e))
            })?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| VideoNoteError::OpenAI(format!("{} API error: {}", self.model, e)))?;

        Ok(response.text.trim().to_string())
    }

    /// Transcribe an audio file and write the text to `output_path`.
    #[instrument(skip(self), fields(audio_path = %audio_path.display()))]
    pub async fn transcribe_to_file(&self, audio_path: &Path, output_path: &Path) -> Result<()> {
        let text = self.transcribe(audio_path).await?;
        tokio::fs::write(output_path, text).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_keeps_model() {
        // Just verify construction (no API call)
        let engine = TranscriptEngine::new("sk-test", "whisper-1");
        assert_eq!(engine.model, "whisper-1");
    }
}
