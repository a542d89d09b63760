pub mod client;

pub use client::CallbackHttpClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::transcription::model::CallbackPayload;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotificationError(pub String);

/// Best-effort completion notification. One attempt, no retry; a failure is
/// recorded on the job and the caller falls back to polling.
#[async_trait]
pub trait CallbackNotifier: Send + Sync {
    async fn notify(
        &self,
        callback_url: &str,
        payload: &CallbackPayload,
    ) -> Result<(), NotificationError>;
}
