use super::dto::{
    CallbackEchoRequest, CallbackEchoResponse, JobResponse, TranscribeRequest, TranscribeResponse,
};
use super::model::JobStatus;
use super::service::TranscriptionService;
use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

/// Submit a batch of URLs for transcription
#[utoipa::path(
    post,
    path = "/transcribe",
    request_body = TranscribeRequest,
    responses(
        (status = 200, description = "Job accepted, runs in background", body = TranscribeResponse)
    ),
    tag = "Transcription"
)]
pub async fn submit_transcription(
    State(state): State<AppState>,
    Json(payload): Json<TranscribeRequest>,
) -> impl IntoResponse {
    let job_id = state.jobs.create(payload.callback_url.clone()).await;
    info!("Accepted job {} with {} urls", job_id, payload.urls.len());

    // The request does not wait on the batch; poll GET /job/{id} instead.
    tokio::spawn(TranscriptionService::run(
        state,
        job_id,
        payload.urls,
        payload.callback_url,
    ));

    Json(TranscribeResponse {
        job_id,
        status: JobStatus::InProgress,
    })
}

/// Get job status and results
#[utoipa::path(
    get,
    path = "/job/{job_id}",
    params(
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job record", body = JobResponse),
        (status = 404, description = "Job not found")
    ),
    tag = "Transcription"
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    // Anything that is not a known job id is a 404, including ids that do
    // not parse as a UUID.
    let Ok(job_id) = Uuid::parse_str(&job_id) else {
        return ApiError("Job ID not found".to_string(), StatusCode::NOT_FOUND).into_response();
    };

    match state.jobs.get(job_id).await {
        Some(job) => Json(JobResponse::from_job(job_id, job)).into_response(),
        None => ApiError("Job ID not found".to_string(), StatusCode::NOT_FOUND).into_response(),
    }
}

/// Diagnostic echo of a callback delivery
///
/// This is not the real dispatch target; completed jobs are POSTed to the
/// caller-supplied callback URL. The echo never writes to the job store.
#[utoipa::path(
    post,
    path = "/transcribe/callback/{job_id}",
    params(
        ("job_id" = Uuid, Path, description = "Job ID")
    ),
    request_body = CallbackEchoRequest,
    responses(
        (status = 200, description = "Echo of the received payload", body = CallbackEchoResponse),
        (status = 404, description = "Job not found")
    ),
    tag = "Transcription"
)]
pub async fn callback_echo(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(payload): Json<CallbackEchoRequest>,
) -> impl IntoResponse {
    let Ok(job_id) = Uuid::parse_str(&job_id) else {
        return ApiError("Job ID not found".to_string(), StatusCode::NOT_FOUND).into_response();
    };
    if !state.jobs.contains(job_id).await {
        return ApiError("Job ID not found".to_string(), StatusCode::NOT_FOUND).into_response();
    }

    Json(CallbackEchoResponse {
        message: "Callback received".to_string(),
        job_id,
        url: payload.url,
        transcript: payload.transcript,
    })
    .into_response()
}
