use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::{TranscriptError, TranscriptFetcher, TranscriptFragment};

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

/// Production transcript source, backed by YouTube's timedtext endpoint in
/// its `json3` format.
#[derive(Clone)]
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    lang: String,
}

impl YoutubeTranscriptClient {
    pub fn new(lang: &str, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptClient {
    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptFragment>, TranscriptError> {
        debug!("Fetching transcript for video {}", video_id);

        let response = self
            .http
            .get(TIMEDTEXT_URL)
            .query(&[("v", video_id), ("lang", &self.lang), ("fmt", "json3")])
            .send()
            .await
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(TranscriptError::VideoUnavailable),
            status if !status.is_success() => {
                return Err(TranscriptError::Fetch(format!(
                    "transcript request failed with status {}",
                    status
                )));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        // The endpoint answers 200 with an empty body when no caption track
        // exists for the requested language.
        if body.trim().is_empty() {
            return Err(TranscriptError::NoTranscriptAvailable);
        }

        let parsed: TimedTextResponse =
            serde_json::from_str(&body).map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        let fragments: Vec<TranscriptFragment> = parsed
            .events
            .into_iter()
            .filter_map(|event| {
                let text: String = event
                    .segs
                    .iter()
                    .map(|seg| seg.utf8.as_str())
                    .collect::<Vec<_>>()
                    .concat();
                let text = text.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                Some(TranscriptFragment {
                    text,
                    start_ms: event.t_start_ms,
                    duration_ms: event.d_duration_ms,
                })
            })
            .collect();

        if fragments.is_empty() {
            return Err(TranscriptError::NoTranscriptAvailable);
        }

        Ok(fragments)
    }
}

#[derive(Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    t_start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}
