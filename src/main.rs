use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use voicelog::{
    Config, NoopEnhancer, OpenAiEnhancer, PipelineFactory, PipelineOptions, SessionConfig,
    TranscriptEnhancer, VoiceSession,
};

#[derive(Debug, Parser)]
#[command(name = "voicelog", about = "Voice conversation session controller")]
struct Args {
    /// Config file path, without extension (config crate convention)
    #[arg(long, default_value = "config/voicelog")]
    config: String,

    /// Override the room server URL from the config file
    #[arg(long)]
    room_url: Option<String>,

    /// Override the transcript output path from the config file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);

    let enhancer: Arc<dyn TranscriptEnhancer> = if cfg.enhancer.enabled {
        // Key comes from the environment, never from the config file.
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) => Arc::new(OpenAiEnhancer::new(
                cfg.enhancer.api_base.clone(),
                key,
                cfg.enhancer.model.clone(),
            )),
            Err(_) => {
                warn!("OPENAI_API_KEY not set, transcript enhancement disabled");
                Arc::new(NoopEnhancer)
            }
        }
    } else {
        Arc::new(NoopEnhancer)
    };

    let options = PipelineOptions {
        room_url: args.room_url.unwrap_or_else(|| cfg.room.url.clone()),
        min_endpointing_delay: Duration::from_secs_f64(cfg.pipeline.min_endpointing_delay_secs),
        max_endpointing_delay: Duration::from_secs_f64(cfg.pipeline.max_endpointing_delay_secs),
    };
    let (room, pipeline) = PipelineFactory::create(&cfg.room.backend, options)?;

    let session_config = SessionConfig {
        greeting: cfg.pipeline.greeting.clone(),
        enhance_timeout: Duration::from_secs(cfg.enhancer.timeout_secs),
        transcript_path: args
            .output
            .unwrap_or_else(|| PathBuf::from(&cfg.transcript.output_path)),
        ..SessionConfig::default()
    };

    // Ctrl-C (or the orchestrator's stop signal) ends the Running state
    // and triggers the transcript flush.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let mut session = VoiceSession::new(session_config, room, pipeline, enhancer);
    let outcome = session.run(shutdown_rx).await?;

    info!(
        "Session complete: {} transcript entries",
        outcome.transcript_entries
    );

    Ok(())
}
