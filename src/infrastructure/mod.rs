pub mod callback;
pub mod jobs;
pub mod youtube;
