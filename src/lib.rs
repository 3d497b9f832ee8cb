//! video-note - Video to Notes
//!
//! A CLI tool that turns videos into text notes in three steps: extract the
//! audio track with ffmpeg, transcribe it with OpenAI speech-to-text, and
//! summarize the transcript with a chat model.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `audio` - Audio extraction from video files
//! - `transcription` - Speech-to-text transcription
//! - `chunking` - Word-bounded transcript chunking
//! - `summary` - Concurrent chunked summarization
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use video_note::summary::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let summarizer = Summarizer::new("sk-...", "gpt-4o-mini", 3000);
//!     let notes = summarizer.summarize("the transcript text", 0.2).await?;
//!     println!("{}", notes);
//!
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod summary;
pub mod transcription;

pub use error::{Result, VideoNoteError};
