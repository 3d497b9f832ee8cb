//! Chunked transcript summarization.
//!
//! Splits long transcripts into bounded-size chunks and fans out one
//! chat-completion request per chunk, staggering request starts to keep the
//! burst rate down. Fragments are collected in completion order, which may
//! differ from chunk order.

use crate::chunking::split_into_chunks;
use crate::error::{Result, VideoNoteError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Lower bound for the summary ratio.
pub const MIN_RATIO: f64 = 0.1;
/// Upper bound for the summary ratio.
pub const MAX_RATIO: f64 = 0.5;

/// Seconds of delay added per chunk index before its request starts.
const STAGGER_SECS_PER_CHUNK: u64 = 2;
/// Sampling temperature for summary generation.
const SUMMARY_TEMPERATURE: f32 = 0.3;
/// Separator placed between summary fragments in the combined output.
const FRAGMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Clamp a summary ratio into the supported range.
pub fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// OpenAI-backed chunked summarizer.
pub struct Summarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    chunk_size: usize,
}

impl Summarizer {
    /// Create a new summarizer for the given API key, model, and chunk budget.
    pub fn new(api_key: &str, model: &str, chunk_size: usize) -> Self {
        Self {
            client: create_client(api_key),
            model: model.to_string(),
            chunk_size,
        }
    }

    /// Summarize text to roughly `ratio` of its original length.
    ///
    /// The ratio is clamped into [`MIN_RATIO`, `MAX_RATIO`]. One request is
    /// issued per chunk, all admitted concurrently; a failed chunk fails the
    /// whole operation once every in-flight request has finished.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        let ratio = clamp_ratio(ratio);

        let chunks = split_into_chunks(text, self.chunk_size);
        if chunks.is_empty() {
            return Ok(String::new());
        }

        if chunks.len() == 1 {
            return self.summarize_chunk(&chunks[0], ratio).await;
        }

        let chunk_count = chunks.len();
        info!("Summarizing {} chunks with {}", chunk_count, self.model);

        let pb = ProgressBar::new(chunk_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.green} Summarize [{bar:30.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("█▓░"),
        );

        // One request per chunk with a linear start stagger; completions
        // arrive unordered.
        let mut results = stream::iter(chunks.into_iter().enumerate())
            .map(|(idx, chunk)| async move {
                tokio::time::sleep(Duration::from_secs(idx as u64 * STAGGER_SECS_PER_CHUNK))
                    .await;
                let result = self.summarize_chunk(&chunk, ratio).await;
                (idx, result)
            })
            .buffer_unordered(chunk_count);

        let mut fragments: Vec<String> = Vec::with_capacity(chunk_count);
        let mut first_error: Option<VideoNoteError> = None;

        while let Some((idx, result)) = results.next().await {
            pb.inc(1);
            match result {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(VideoNoteError::Summarization(format!(
                            "Chunk {} failed: {}",
                            idx + 1,
                            e
                        )));
                    }
                }
            }
        }

        pb.finish_and_clear();

        if let Some(e) = first_error {
            return Err(e);
        }

        Ok(fragments.join(FRAGMENT_SEPARATOR))
    }

    /// Issue one chat-completion request for a single chunk.
    async fn summarize_chunk(&self, chunk: &str, ratio: f64) -> Result<String> {
        debug!("Summarizing chunk of {} bytes", chunk.len());

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(build_prompt(chunk, ratio))
                .build()
                .map_err(|e| VideoNoteError::Summarization(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(SUMMARY_TEMPERATURE)
            .max_tokens(max_summary_tokens(chunk, ratio))
            .build()
            .map_err(|e| VideoNoteError::Summarization(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| VideoNoteError::OpenAI(format!("Failed to generate summary: {}", e)))?;

        let fragment = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| VideoNoteError::Summarization("Empty response from LLM".to_string()))?
            .clone();

        Ok(fragment)
    }
}

/// Render the fixed summarization prompt for one chunk.
fn build_prompt(chunk: &str, ratio: f64) -> String {
    format!(
        "Create detailed notes for the following video transcript, keeping key \
         information and important details:\n\nContent:\n{}\n\nProduce a concise but \
         information-rich summary, roughly {:.0}% of the original length.",
        chunk,
        ratio * 100.0
    )
}

/// Approximate output token budget: input length scaled by the ratio, with headroom.
fn max_summary_tokens(chunk: &str, ratio: f64) -> u32 {
    (chunk.len() as f64 * ratio * 1.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ratio_bounds() {
        assert_eq!(clamp_ratio(0.05), MIN_RATIO);
        assert_eq!(clamp_ratio(0.2), 0.2);
        assert_eq!(clamp_ratio(0.9), MAX_RATIO);
    }

    #[test]
    fn test_prompt_embeds_chunk_and_percentage() {
        let prompt = build_prompt("some transcript text", 0.2);
        assert!(prompt.contains("some transcript text"));
        assert!(prompt.contains("20%"));
    }

    #[test]
    fn test_max_summary_tokens_scales_with_input() {
        // 100 bytes * 0.2 * 1.5 = 30 tokens
        let chunk = "x".repeat(100);
        assert_eq!(max_summary_tokens(&chunk, 0.2), 30);
        assert_eq!(max_summary_tokens("", 0.2), 0);
    }

    #[test]
    fn test_summarizer_keeps_settings() {
        let summarizer = Summarizer::new("sk-test", "gpt-4o-mini", 3000);
        assert_eq!(summarizer.model, "gpt-4o-mini");
        assert_eq!(summarizer.chunk_size, 3000);
    }
}
