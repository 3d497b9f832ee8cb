//! CLI module for video-note.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// video-note - Video to Notes
///
/// Generates text notes from videos by extracting the audio track,
/// transcribing it, and summarizing the transcript with an LLM.
#[derive(Parser, Debug)]
#[command(name = "video-note")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate notes from a video (extract audio, transcribe, summarize)
    Generate {
        /// Input video file
        #[arg(short, long)]
        input: PathBuf,

        /// Output notes file (defaults to the input name with a .txt extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target summary length as a fraction of the transcript (clamped to 0.1-0.5)
        #[arg(short, long, default_value_t = 0.2)]
        ratio: f64,
    },

    /// Transcribe an audio file to text
    Transcribe {
        /// Input audio file
        #[arg(short, long)]
        input: PathBuf,

        /// Output transcript file (defaults to the input name with a .txt extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a transcript into notes
    Summarize {
        /// Input transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Output summary file (defaults to <input>.summary.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target summary length as a fraction of the input (must be 0.1-0.5)
        #[arg(short, long, default_value_t = 0.2)]
        ratio: f64,
    },
}
