use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Speaker attribution for a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

/// A single durable transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Who spoke this utterance
    pub role: Role,

    /// RFC 3339 UTC timestamp captured when the entry was built
    pub timestamp: String,

    /// Normalized utterance text; interrupted assistant utterances carry
    /// a literal " [interrupted]" suffix
    pub text: String,
}

impl TranscriptEntry {
    /// Build an entry stamped with the current wall-clock time
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            timestamp: Utc::now().to_rfc3339(),
            text: text.into(),
        }
    }
}
