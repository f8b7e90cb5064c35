use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a voice session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "session-2026-08-28-support")
    pub session_id: String,

    /// Spoken once the pipeline is up; may be interrupted by the user
    pub greeting: String,

    /// Upper bound on a single enhancement call before falling back to
    /// the raw utterance text
    pub enhance_timeout: Duration,

    /// Where the transcript JSON is written at teardown
    pub transcript_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            greeting: "Hey, how can I help you today?".to_string(),
            enhance_timeout: Duration::from_secs(10),
            transcript_path: PathBuf::from("conversation_log.json"),
        }
    }
}
