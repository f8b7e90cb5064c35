//! Usage metrics aggregation
//!
//! The pipeline emits periodic `metrics_collected` events with per-stage
//! usage counters. They never touch the transcript; the collector sums
//! them so the session can log one summary at teardown.

use serde::Serialize;

use crate::pipeline::UsageMetrics;

/// Totals accumulated over a session
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsageSummary {
    pub llm_prompt_tokens: u64,
    pub llm_completion_tokens: u64,
    pub tts_characters: u64,
    pub stt_audio_seconds: f64,

    /// Number of metrics events collected
    pub events_collected: usize,
}

/// Accumulates usage counters across metrics events
#[derive(Debug, Default)]
pub struct UsageCollector {
    summary: UsageSummary,
}

impl UsageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(&mut self, metrics: &UsageMetrics) {
        self.summary.llm_prompt_tokens += metrics.llm_prompt_tokens;
        self.summary.llm_completion_tokens += metrics.llm_completion_tokens;
        self.summary.tts_characters += metrics.tts_characters;
        self.summary.stt_audio_seconds += metrics.stt_audio_seconds;
        self.summary.events_collected += 1;
    }

    pub fn summary(&self) -> UsageSummary {
        self.summary.clone()
    }
}
