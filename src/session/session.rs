use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use super::config::SessionConfig;
use crate::enhance::TranscriptEnhancer;
use crate::metrics::{UsageCollector, UsageSummary};
use crate::pipeline::{
    Participant, PipelineEvent, RoomTransport, SubscribeMode, TranscriptAlternative, VoicePipeline,
};
use crate::transcript::{normalize_content, Role, TranscriptEntry, TranscriptStore};

/// Final report returned when a session terminates
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub transcript_entries: usize,
    pub usage: UsageSummary,
}

/// A voice conversation session.
///
/// Owns the conversation lifecycle: connects to the room, waits for a
/// participant, starts the pipeline, correlates its events into the
/// transcript store, and flushes the store at teardown.
pub struct VoiceSession {
    config: SessionConfig,
    room: Box<dyn RoomTransport>,
    pipeline: Box<dyn VoicePipeline>,
    enhancer: Arc<dyn TranscriptEnhancer>,
    store: TranscriptStore,
}

impl VoiceSession {
    pub fn new(
        config: SessionConfig,
        room: Box<dyn RoomTransport>,
        pipeline: Box<dyn VoicePipeline>,
        enhancer: Arc<dyn TranscriptEnhancer>,
    ) -> Self {
        Self {
            config,
            room,
            pipeline,
            enhancer,
            store: TranscriptStore::new(),
        }
    }

    /// The session's conversation log (shared; cheap to clone)
    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    /// Drive the session to completion.
    ///
    /// Runs Connecting -> WaitingForParticipant -> PipelineStarting ->
    /// Running, idles until `shutdown` fires, then drains in-flight
    /// events and flushes the transcript. Only room connection failure
    /// is fatal; teardown errors are logged and swallowed.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<SessionOutcome> {
        info!(
            "Session {}: connecting to room via {}",
            self.config.session_id,
            self.room.name()
        );
        self.room
            .connect(SubscribeMode::AudioOnly)
            .await
            .context("Failed to connect to room transport")?;

        // No timeout: voice sessions are open-ended.
        let participant = self
            .room
            .wait_for_participant()
            .await
            .context("Failed while waiting for a participant")?;
        info!(
            "Starting voice session for participant {}",
            participant.identity
        );

        let events = self
            .pipeline
            .start(&participant)
            .await
            .context("Failed to start voice pipeline")?;

        let correlator = tokio::spawn(correlate_events(
            events,
            self.store.clone(),
            Arc::clone(&self.enhancer),
            self.config.enhance_timeout,
        ));

        // The platform brings user speech input up in a second init
        // phase; wait for it so the greeting can be interrupted and no
        // user turn is lost.
        self.pipeline
            .human_input_ready()
            .await
            .context("Pipeline human input never became ready")?;

        self.pipeline
            .say(&self.config.greeting, true)
            .await
            .context("Failed to speak greeting")?;

        self.idle_until_shutdown(&mut shutdown, &participant).await;

        info!("Session ending, draining events and flushing transcript");

        // Stopping the pipeline closes the event channel; the correlator
        // drains whatever is in flight and exits.
        if let Err(e) = self.pipeline.stop().await {
            error!("Failed to stop voice pipeline: {}", e);
        }

        let usage = match correlator.await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Event correlator task panicked: {}", e);
                UsageSummary::default()
            }
        };

        // Flush failures are logged, never propagated: the session still
        // terminates cleanly (data loss is accepted, not retried).
        if let Err(e) = self.store.flush(&self.config.transcript_path).await {
            error!("Failed to save transcript: {}", e);
        }

        let transcript_entries = self.store.len().await;
        info!(
            "Session {} finished: {} transcript entries, {} metrics events",
            self.config.session_id, transcript_entries, usage.events_collected
        );

        Ok(SessionOutcome {
            transcript_entries,
            usage,
        })
    }

    /// Cooperative idle loop. All real work happens on the correlator
    /// task; this just keeps the session alive until shutdown.
    async fn idle_until_shutdown(
        &self,
        shutdown: &mut watch::Receiver<bool>,
        participant: &Participant,
    ) {
        loop {
            if *shutdown.borrow() {
                break;
            }
            tokio::select! {
                _ = sleep(Duration::from_secs(1)) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        // Shutdown sender dropped; treat as cancellation.
                        warn!("Shutdown channel closed, ending session");
                        break;
                    }
                }
            }
        }
        info!(
            "Shutdown requested for session with participant {}",
            participant.identity
        );
    }
}

/// Event correlator: translates each pipeline event into zero or one
/// transcript appends.
///
/// Runs as its own task so the enhancement round trip never stalls room
/// or pipeline I/O; events queue on the channel meanwhile, which keeps
/// appends in emission order.
async fn correlate_events(
    mut events: mpsc::Receiver<PipelineEvent>,
    store: TranscriptStore,
    enhancer: Arc<dyn TranscriptEnhancer>,
    enhance_timeout: Duration,
) -> UsageSummary {
    let mut usage = UsageCollector::new();

    while let Some(event) = events.recv().await {
        match event {
            PipelineEvent::AgentSpeechCommitted { content } => {
                let text = normalize_content(&content);
                if text.is_empty() {
                    continue;
                }
                info!("Assistant said: {}", text);
                store
                    .append(TranscriptEntry::now(Role::Assistant, text))
                    .await;
            }

            PipelineEvent::AgentSpeechInterrupted { content } => {
                let text = normalize_content(&content);
                if text.is_empty() {
                    continue;
                }
                info!("Assistant interrupted: {}", text);
                store
                    .append(TranscriptEntry::now(
                        Role::Assistant,
                        format!("{} [interrupted]", text),
                    ))
                    .await;
            }

            PipelineEvent::FinalTranscript { alternatives } => {
                // Emptiness is checked on the raw text, before enhancement.
                let raw = TranscriptAlternative::primary_text(&alternatives);
                if raw.is_empty() {
                    continue;
                }
                let text = enhance_or_fallback(enhancer.as_ref(), &raw, enhance_timeout).await;
                info!("User said: {}", text);
                store.append(TranscriptEntry::now(Role::User, text)).await;
            }

            PipelineEvent::MetricsCollected { metrics } => {
                info!(
                    "Usage metrics: llm {}+{} tokens, tts {} chars, stt {:.1}s audio",
                    metrics.llm_prompt_tokens,
                    metrics.llm_completion_tokens,
                    metrics.tts_characters,
                    metrics.stt_audio_seconds
                );
                usage.collect(&metrics);
            }
        }
    }

    usage.summary()
}

/// One best-effort enhancement attempt, bounded by `enhance_timeout`.
/// Any failure (error, timeout, empty completion) falls back to the raw
/// text unchanged.
async fn enhance_or_fallback(
    enhancer: &dyn TranscriptEnhancer,
    raw: &str,
    enhance_timeout: Duration,
) -> String {
    match timeout(enhance_timeout, enhancer.enhance(raw)).await {
        Ok(Ok(enhanced)) => {
            let enhanced = enhanced.trim().to_string();
            if enhanced.is_empty() {
                raw.to_string()
            } else {
                enhanced
            }
        }
        Ok(Err(e)) => {
            error!("Error enhancing transcript: {}", e);
            raw.to_string()
        }
        Err(_) => {
            error!("Enhancement timed out after {:?}", enhance_timeout);
            raw.to_string()
        }
    }
}
