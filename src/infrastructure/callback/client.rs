use std::time::Duration;

use async_trait::async_trait;

use super::{CallbackNotifier, NotificationError};
use crate::modules::transcription::model::CallbackPayload;

#[derive(Clone)]
pub struct CallbackHttpClient {
    http: reqwest::Client,
}

impl CallbackHttpClient {
    pub fn new(timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }
}

#[async_trait]
impl CallbackNotifier for CallbackHttpClient {
    async fn notify(
        &self,
        callback_url: &str,
        payload: &CallbackPayload,
    ) -> Result<(), NotificationError> {
        self.http
            .post(callback_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotificationError(e.to_string()))?
            .error_for_status()
            .map_err(|e| NotificationError(e.to_string()))?;

        Ok(())
    }
}
