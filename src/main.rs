use anyhow::{Context, Result};
use case_interviewer::{
    AppState, ChatClient, Config, ElevenLabsSynthesizer, Interviewer, MemoryStore,
    OpenAiTranscriber, TranscriptLog,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "case-interviewer", about = "Scripted case-interview backend")]
struct Cli {
    /// Config file (without extension), as understood by the config crate
    #[arg(long, default_value = "config/interviewer")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Case Interviewer v0.1.0");
    info!("Loaded config: {}", cfg.service.name);

    let openai_api_key =
        std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
    let elevenlabs_api_key =
        std::env::var("ELEVENLABS_API_KEY").context("ELEVENLABS_API_KEY must be set")?;

    let interviewer = Arc::new(Interviewer::new(
        Arc::new(MemoryStore::new()),
        Arc::new(OpenAiTranscriber::new(
            openai_api_key.clone(),
            cfg.openai.transcription_model.clone(),
        )),
        Arc::new(ChatClient::new(
            openai_api_key,
            cfg.openai.chat_model.clone(),
            cfg.openai.max_tokens,
        )),
        Arc::new(ElevenLabsSynthesizer::new(
            elevenlabs_api_key,
            cfg.elevenlabs.voice_id.clone(),
            cfg.elevenlabs.model_id.clone(),
            cfg.elevenlabs.output_format.clone(),
        )),
        TranscriptLog::new(&cfg.interview.transcripts_path),
        cfg.interview.math_wait_secs,
    ));

    let app = case_interviewer::create_router(AppState::new(interviewer));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
