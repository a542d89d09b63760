use tracing::{info, warn};
use uuid::Uuid;

use super::model::{CallbackPayload, ItemResult};
use crate::infrastructure::youtube::extract_video_id;
use crate::state::AppState;

pub struct TranscriptionService;

impl TranscriptionService {
    /// Processes one batch to completion. Runs on its own spawned task,
    /// exactly once per job; nothing observes it directly.
    ///
    /// Every URL gets exactly one result, in input order. No single URL can
    /// fail the batch, and a failed callback delivery only annotates the job.
    pub async fn run(state: AppState, job_id: Uuid, urls: Vec<String>, callback_url: String) {
        let mut results = Vec::with_capacity(urls.len());
        for url in &urls {
            results.push(Self::transcribe_url(&state, url).await);
        }

        state.jobs.complete(job_id, results.clone()).await;
        info!("Job {} completed with {} results", job_id, results.len());

        let payload = CallbackPayload { job_id, results };
        if let Err(e) = state.notifier.notify(&callback_url, &payload).await {
            warn!("Callback delivery failed for job {}: {}", job_id, e);
            state.jobs.record_callback_error(job_id, e.to_string()).await;
        }
    }

    async fn transcribe_url(state: &AppState, url: &str) -> ItemResult {
        let video_id = match extract_video_id(url) {
            Ok(id) => id,
            Err(e) => return ItemResult::error(url, e.to_string()),
        };

        match state.transcripts.fetch_transcript(&video_id).await {
            Ok(fragments) => {
                let text = fragments
                    .iter()
                    .map(|f| f.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                ItemResult::transcript(url, text)
            }
            Err(e) => ItemResult::error(url, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::settings::AppConfig;
    use crate::infrastructure::callback::{CallbackNotifier, NotificationError};
    use crate::infrastructure::jobs::JobStore;
    use crate::infrastructure::youtube::{TranscriptError, TranscriptFetcher, TranscriptFragment};
    use crate::modules::transcription::model::JobStatus;

    struct FakeFetcher;

    #[async_trait]
    impl TranscriptFetcher for FakeFetcher {
        async fn fetch_transcript(
            &self,
            video_id: &str,
        ) -> Result<Vec<TranscriptFragment>, TranscriptError> {
            match video_id {
                "abc123" => Ok(vec![
                    TranscriptFragment {
                        text: "hello".to_string(),
                        start_ms: 0,
                        duration_ms: 1000,
                    },
                    TranscriptFragment {
                        text: "world".to_string(),
                        start_ms: 1000,
                        duration_ms: 1000,
                    },
                ]),
                "gone" => Err(TranscriptError::VideoUnavailable),
                other => Err(TranscriptError::Fetch(format!("no fixture for {}", other))),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        deliveries: Mutex<Vec<(String, CallbackPayload)>>,
        fail: bool,
    }

    #[async_trait]
    impl CallbackNotifier for RecordingNotifier {
        async fn notify(
            &self,
            callback_url: &str,
            payload: &CallbackPayload,
        ) -> Result<(), NotificationError> {
            if self.fail {
                return Err(NotificationError("connection refused".to_string()));
            }
            self.deliveries
                .lock()
                .await
                .push((callback_url.to_string(), payload.clone()));
            Ok(())
        }
    }

    fn test_state(notifier: Arc<RecordingNotifier>) -> AppState {
        AppState::new(
            AppConfig {
                server_port: 0,
                transcript_lang: "en".to_string(),
                fetch_timeout_secs: 1,
                callback_timeout_secs: 1,
            },
            JobStore::new(),
            Arc::new(FakeFetcher),
            notifier,
        )
    }

    #[tokio::test]
    async fn batch_tolerates_per_item_failures_and_keeps_input_order() {
        let notifier = Arc::new(RecordingNotifier::default());
        let state = test_state(notifier.clone());
        let job_id = state.jobs.create("http://cb.example/done".to_string()).await;

        let urls = vec![
            "https://www.youtube.com/watch?v=abc123".to_string(),
            "not-a-url".to_string(),
            "https://youtu.be/gone".to_string(),
        ];
        TranscriptionService::run(state.clone(), job_id, urls.clone(), "http://cb.example/done".to_string())
            .await;

        let job = state.jobs.get(job_id).await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.results.len(), 3);

        assert_eq!(job.results[0].url, urls[0]);
        assert_eq!(job.results[0].transcript.as_deref(), Some("hello world"));

        assert_eq!(job.results[1].url, urls[1]);
        assert_eq!(job.results[1].error.as_deref(), Some("Invalid YouTube URL"));

        assert_eq!(job.results[2].url, urls[2]);
        assert_eq!(
            job.results[2].error.as_deref(),
            Some("Transcript not available or video unavailable.")
        );

        let deliveries = notifier.deliveries.lock().await;
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, "http://cb.example/done");
        assert_eq!(deliveries[0].1.job_id, job_id);
        assert_eq!(deliveries[0].1.results, job.results);
    }

    #[tokio::test]
    async fn failed_callback_annotates_job_without_changing_status() {
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let state = test_state(notifier);
        let job_id = state.jobs.create("http://unreachable".to_string()).await;

        let urls = vec!["https://www.youtube.com/watch?v=abc123".to_string()];
        TranscriptionService::run(state.clone(), job_id, urls, "http://unreachable".to_string())
            .await;

        let job = state.jobs.get(job_id).await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.results.len(), 1);
        assert_eq!(job.callback_error.as_deref(), Some("connection refused"));
    }
}
