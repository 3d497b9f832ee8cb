//! Configuration settings for video-note.

use crate::error::{Result, VideoNoteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure, loaded from a JSON file.
///
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// OpenAI API key. Required, must be non-empty.
    pub openai_api_key: String,
    /// Chat-completion model used for summarization.
    pub model: String,
    /// Speech-to-text model used for transcription.
    pub transcription_model: String,
    /// Character budget for transcript chunks sent to the summarizer.
    pub chunk_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            transcription_model: "whisper-1".to_string(),
            chunk_size: 3000,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file location.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        if !config_path.exists() {
            return Err(VideoNoteError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content = std::fs::read_to_string(&config_path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get the default configuration file path.
    ///
    /// Prefers `config.json` in the working directory, falling back to the
    /// user configuration directory.
    pub fn default_config_path() -> PathBuf {
        let local = PathBuf::from("config.json");
        if local.exists() {
            return local;
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("video-note")
            .join("config.json")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Check required fields.
    fn validate(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            return Err(VideoNoteError::Config(
                "openai_api_key must not be empty".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(VideoNoteError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"openai_api_key": "sk-test", "model": "gpt-4o"}"#).unwrap();

        assert_eq!(settings.openai_api_key, "sk-test");
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.transcription_model, "whisper-1");
        assert_eq!(settings.chunk_size, 3000);
    }

    #[test]
    fn test_full_config_parses() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "openai_api_key": "sk-test",
                "model": "gpt-4o",
                "transcription_model": "gpt-4o-transcribe",
                "chunk_size": 1500
            }"#,
        )
        .unwrap();

        assert_eq!(settings.transcription_model, "gpt-4o-transcribe");
        assert_eq!(settings.chunk_size, 1500);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let settings = Settings {
            openai_api_key: "sk-test".to_string(),
            chunk_size: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"openai_api_key": "sk-test", "model": "gpt-4o"}"#).unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.model, "gpt-4o");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let result = Settings::load_from(Some(&path));
        assert!(matches!(result, Err(VideoNoteError::Config(_))));
    }
}
