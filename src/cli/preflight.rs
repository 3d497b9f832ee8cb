//! Pre-flight checks before expensive operations.
//!
//! Validates that required external tools are available before starting
//! operations that would otherwise fail midway.

use crate::error::{Result, VideoNoteError};
use std::process::Command;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Note generation requires ffmpeg for audio extraction.
    Generate,
    /// Transcription only needs the API (key is checked at startup).
    Transcribe,
    /// Summarization only needs the API (key is checked at startup).
    Summarize,
}

/// Run pre-flight checks for the given operation.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Generate => check_tool("ffmpeg")?,
        Operation::Transcribe | Operation::Summarize => {}
    }
    Ok(())
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    // ffmpeg uses -version (single dash)
    let version_arg = match name {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    };
    match Command::new(name).arg(version_arg).output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(VideoNoteError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(VideoNoteError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(VideoNoteError::ToolNotFound(format!("{}: {}", name, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_has_no_tool_requirements() {
        assert!(check(Operation::Summarize).is_ok());
        assert!(check(Operation::Transcribe).is_ok());
    }
}
