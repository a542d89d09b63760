use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub mod dto;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transcribe", post(handler::submit_transcription))
        .route("/transcribe/callback/{job_id}", post(handler::callback_echo))
        .route("/job/{job_id}", get(handler::get_job))
}
