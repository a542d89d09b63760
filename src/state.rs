use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::callback::CallbackNotifier;
use crate::infrastructure::jobs::JobStore;
use crate::infrastructure::youtube::TranscriptFetcher;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub jobs: JobStore,
    pub transcripts: Arc<dyn TranscriptFetcher>,
    pub notifier: Arc<dyn CallbackNotifier>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        jobs: JobStore,
        transcripts: Arc<dyn TranscriptFetcher>,
        notifier: Arc<dyn CallbackNotifier>,
    ) -> Self {
        Self {
            config,
            jobs,
            transcripts,
            notifier,
        }
    }
}
