//! Audio extraction from video files.
//!
//! Shells out to ffmpeg to demux the audio track and transcode it to MP3.

use crate::error::{Result, VideoNoteError};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Extracts the audio track from a video file as MP3.
///
/// Fails if ffmpeg is missing from PATH or exits non-zero; ffmpeg's stderr is
/// included in the error.
#[instrument(skip_all, fields(video = %video_path.display()))]
pub async fn extract_audio(video_path: &Path, audio_path: &Path) -> Result<()> {
    debug!("Extracting audio to {:?}", audio_path);

    let result = Command::new("ffmpeg")
        .arg("-i").arg(video_path)
        .arg("-vn")
        .arg("-codec:a").arg("libmp3lame")
        .arg("-y")
        .arg("-loglevel").arg("error")
        .arg(audio_path)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    match result {
        Ok(out) if out.status.success() => Ok(()),
        Ok(out) => {
            let err = String::from_utf8_lossy(&out.stderr);
            Err(VideoNoteError::ToolFailed(format!(
                "ffmpeg extraction failed: {err}"
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(VideoNoteError::ToolNotFound("ffmpeg".into()))
        }
        Err(e) => Err(VideoNoteError::AudioExtraction(format!("ffmpeg error: {e}"))),
    }
}
