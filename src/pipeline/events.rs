use serde::{Deserialize, Serialize};

use crate::transcript::MessageContent;

/// One recognition hypothesis from the speech-to-text engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptAlternative {
    pub text: String,
}

impl TranscriptAlternative {
    /// Best hypothesis text: the first alternative, trimmed; empty when
    /// no alternatives are present.
    pub fn primary_text(alternatives: &[TranscriptAlternative]) -> String {
        alternatives
            .first()
            .map(|alt| alt.text.trim().to_string())
            .unwrap_or_default()
    }
}

/// Usage counters attached to a metrics_collected event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageMetrics {
    #[serde(default)]
    pub llm_prompt_tokens: u64,
    #[serde(default)]
    pub llm_completion_tokens: u64,
    #[serde(default)]
    pub tts_characters: u64,
    #[serde(default)]
    pub stt_audio_seconds: f64,
}

/// Events emitted by the voice pipeline.
///
/// Matched exhaustively by the event correlator; each event maps to zero
/// or one transcript appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// The assistant finished speaking an utterance in full
    AgentSpeechCommitted { content: MessageContent },

    /// The user cut the assistant off mid-utterance
    AgentSpeechInterrupted { content: MessageContent },

    /// A completed (non-interim) user speech recognition result
    FinalTranscript {
        alternatives: Vec<TranscriptAlternative>,
    },

    /// Periodic usage metrics from the STT/LLM/TTS stages
    MetricsCollected { metrics: UsageMetrics },
}
