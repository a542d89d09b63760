use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use transcript_service::app;
use transcript_service::config::settings::AppConfig;
use transcript_service::infrastructure::callback::CallbackHttpClient;
use transcript_service::infrastructure::jobs::JobStore;
use transcript_service::infrastructure::youtube::YoutubeTranscriptClient;
use transcript_service::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();

    let jobs = JobStore::new();
    let transcripts = Arc::new(YoutubeTranscriptClient::new(
        &config.transcript_lang,
        config.fetch_timeout_secs,
    ));
    let notifier = Arc::new(CallbackHttpClient::new(config.callback_timeout_secs));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::new(config, jobs, transcripts, notifier);

    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
