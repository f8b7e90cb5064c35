pub mod config;
pub mod enhance;
pub mod metrics;
pub mod pipeline;
pub mod session;
pub mod transcript;

pub use config::Config;
pub use enhance::{NoopEnhancer, OpenAiEnhancer, TranscriptEnhancer};
pub use metrics::{UsageCollector, UsageSummary};
pub use pipeline::{
    Participant, PipelineEvent, PipelineFactory, PipelineOptions, RoomTransport, SubscribeMode,
    TranscriptAlternative, UsageMetrics, VoicePipeline,
};
pub use session::{SessionConfig, SessionOutcome, VoiceSession};
pub use transcript::{normalize_content, MessageContent, Role, TranscriptEntry, TranscriptStore};
