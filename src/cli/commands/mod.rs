//! CLI command implementations.

mod generate;
mod summarize;
mod transcribe;

pub use generate::run_generate;
pub use summarize::run_summarize;
pub use transcribe::run_transcribe;

use std::path::{Path, PathBuf};

/// Derive a default output path by replacing the input's extension.
pub(crate) fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transcript_path() {
        assert_eq!(
            default_output_path(Path::new("video.mp4"), "txt"),
            PathBuf::from("video.txt")
        );
    }

    #[test]
    fn test_default_summary_path() {
        assert_eq!(
            default_output_path(Path::new("transcript.txt"), "summary.txt"),
            PathBuf::from("transcript.summary.txt")
        );
    }

    #[test]
    fn test_input_without_extension() {
        assert_eq!(
            default_output_path(Path::new("recording"), "txt"),
            PathBuf::from("recording.txt")
        );
    }
}
