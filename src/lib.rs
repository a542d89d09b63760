// Batch YouTube transcription service.
//
// Accepts batches of video URLs, fetches transcripts in the background and
// notifies a caller-supplied callback URL when the job finishes. Job state
// lives in memory only; poll GET /job/{id} for the reliable channel of truth.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;
