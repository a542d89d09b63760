use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::transcription::model::{ItemResult, Job, JobStatus};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TranscribeRequest {
    pub urls: Vec<String>,
    pub callback_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscribeResponse {
    pub job_id: Uuid,
    pub status: JobStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    pub job_id: Uuid,
    pub status: JobStatus,
    pub callback_url: String,
    pub results: Vec<ItemResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_error: Option<String>,
}

impl JobResponse {
    pub fn from_job(job_id: Uuid, job: Job) -> Self {
        Self {
            job_id,
            status: job.status,
            callback_url: job.callback_url,
            results: job.results,
            callback_error: job.callback_error,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CallbackEchoRequest {
    pub url: String,
    pub transcript: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CallbackEchoResponse {
    pub message: String,
    pub job_id: Uuid,
    pub url: String,
    pub transcript: String,
}
