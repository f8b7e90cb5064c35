//! External collaborator seams
//!
//! The room transport, voice pipeline (STT -> LLM -> TTS with VAD and
//! turn detection), and the inference engines behind it are supplied by
//! an external media/agent platform. This module defines the traits the
//! session controller consumes and the typed events the pipeline emits;
//! it does not reimplement any of them.

pub mod events;

use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

pub use events::{PipelineEvent, TranscriptAlternative, UsageMetrics};

/// Track subscription mode for the room connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeMode {
    /// Subscribe to audio tracks only (voice sessions don't need video)
    AudioOnly,
    All,
}

/// A remote participant in the room
#[derive(Debug, Clone)]
pub struct Participant {
    pub identity: String,
}

/// Connection to a real-time audio room.
///
/// Connect failures are fatal to the session; the participant wait is
/// deliberately unbounded (voice sessions are open-ended).
#[async_trait::async_trait]
pub trait RoomTransport: Send + Sync {
    /// Open the room connection
    async fn connect(&mut self, mode: SubscribeMode) -> Result<()>;

    /// Suspend until a remote participant is present
    async fn wait_for_participant(&mut self) -> Result<Participant>;

    /// Transport name for logging
    fn name(&self) -> &str;
}

/// The externally supplied voice pipeline.
///
/// `start` returns the event channel; the sender side is owned by the
/// pipeline, so `stop` closes the channel and lets consumers drain.
#[async_trait::async_trait]
pub trait VoicePipeline: Send + Sync {
    /// Start the pipeline against the connected room and participant.
    ///
    /// Returns a channel receiver that will receive pipeline events.
    async fn start(&mut self, participant: &Participant) -> Result<mpsc::Receiver<PipelineEvent>>;

    /// Resolves once the pipeline's human-input stage is live.
    ///
    /// The platform brings user speech recognition up in a second
    /// initialization phase after `start`; no user final transcript can
    /// arrive before this resolves.
    async fn human_input_ready(&mut self) -> Result<()>;

    /// Speak `text` to the room
    async fn say(&self, text: &str, allow_interruptions: bool) -> Result<()>;

    /// Stop the pipeline and close the event channel
    async fn stop(&mut self) -> Result<()>;

    /// Pipeline name for logging
    fn name(&self) -> &str;
}

/// Construction parameters handed to the platform backend
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Room server URL
    pub room_url: String,

    /// Minimum silence before the turn detector may end a user turn
    pub min_endpointing_delay: Duration,

    /// Maximum silence before a user turn is force-ended
    pub max_endpointing_delay: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            room_url: "ws://localhost:7880".to_string(),
            min_endpointing_delay: Duration::from_millis(500),
            max_endpointing_delay: Duration::from_secs(5),
        }
    }
}

/// Pipeline backend factory
pub struct PipelineFactory;

impl PipelineFactory {
    /// Create the room transport and voice pipeline for the named backend.
    pub fn create(
        backend: &str,
        options: PipelineOptions,
    ) -> Result<(Box<dyn RoomTransport>, Box<dyn VoicePipeline>)> {
        debug!(
            "Creating pipeline backend '{}' for room {}",
            backend, options.room_url
        );

        match backend {
            "livekit" => {
                // Links against the platform SDK; not compiled into this build.
                anyhow::bail!(
                    "livekit backend requires the external media platform SDK"
                )
            }

            other => {
                anyhow::bail!("Unknown pipeline backend '{}'", other)
            }
        }
    }
}
