pub mod client;

pub use client::YoutubeTranscriptClient;

use async_trait::async_trait;
use thiserror::Error;

/// Everything that can go wrong for a single URL in a batch. None of these
/// fail the job; each is recorded on the item that hit it.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,
    #[error("Transcript not available or video unavailable.")]
    NoTranscriptAvailable,
    #[error("Transcript not available or video unavailable.")]
    VideoUnavailable,
    #[error("{0}")]
    Fetch(String),
}

/// One caption cue as returned by the transcript source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptFragment {
    pub text: String,
    pub start_ms: u64,
    pub duration_ms: u64,
}

/// Contract for the transcript source. Object-safe so tests can inject a
/// fake through `AppState`.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptFragment>, TranscriptError>;
}

/// Extracts the video id from a loosely-formatted URL string. Two shapes are
/// recognized: the `v=<id>` query form (truncated at the next `&`) and the
/// `youtu.be/<id>` shortened form. No further validation happens here;
/// garbage ids surface later as fetch failures.
pub fn extract_video_id(url: &str) -> Result<String, TranscriptError> {
    if let Some((_, rest)) = url.split_once("v=") {
        let id = rest.split('&').next().unwrap_or(rest);
        return Ok(id.to_string());
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        return Ok(rest.to_string());
    }
    Err(TranscriptError::InvalidUrl)
}
