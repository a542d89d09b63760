use crate::config::env::{self, EnvKey};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub transcript_lang: String,
    pub fetch_timeout_secs: u64,
    pub callback_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            transcript_lang: env::get_or(EnvKey::TranscriptLang, "en"),
            fetch_timeout_secs: env::get_parsed(EnvKey::FetchTimeoutSecs, 15),
            callback_timeout_secs: env::get_parsed(EnvKey::CallbackTimeoutSecs, 10),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
