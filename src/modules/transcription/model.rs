use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    InProgress,
    Completed,
}

/// Outcome for a single URL within a batch. Exactly one of `transcript` or
/// `error` is set; the other is omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResult {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemResult {
    pub fn transcript(url: &str, text: String) -> Self {
        Self {
            url: url.to_string(),
            transcript: Some(text),
            error: None,
        }
    }

    pub fn error(url: &str, message: String) -> Self {
        Self {
            url: url.to_string(),
            transcript: None,
            error: Some(message),
        }
    }
}

/// One batch-transcription request and its accumulated outcome. Held only in
/// the in-memory store; lost on restart.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Job {
    pub status: JobStatus,
    pub callback_url: String,
    pub results: Vec<ItemResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_error: Option<String>,
}

impl Job {
    pub fn new(callback_url: String) -> Self {
        Self {
            status: JobStatus::InProgress,
            callback_url,
            results: Vec::new(),
            callback_error: None,
        }
    }
}

/// Body POSTed to the caller-supplied callback URL on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub job_id: Uuid,
    pub results: Vec<ItemResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_result_serializes_exactly_one_outcome_field() {
        let ok = serde_json::to_value(ItemResult::transcript("u", "hello world".into())).unwrap();
        assert_eq!(ok["transcript"], "hello world");
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(ItemResult::error("u", "boom".into())).unwrap();
        assert_eq!(failed["error"], "boom");
        assert!(failed.get("transcript").is_none());
    }

    #[test]
    fn job_status_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(JobStatus::InProgress).unwrap(),
            "in_progress"
        );
        assert_eq!(
            serde_json::to_value(JobStatus::Completed).unwrap(),
            "completed"
        );
    }

    #[test]
    fn fresh_job_omits_callback_error() {
        let job = serde_json::to_value(Job::new("http://cb".into())).unwrap();
        assert_eq!(job["status"], "in_progress");
        assert_eq!(job["results"].as_array().unwrap().len(), 0);
        assert!(job.get("callback_error").is_none());
    }
}
