use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Assistant speech content as delivered by the pipeline.
///
/// The platform emits either a plain string or a list of content parts
/// whose first element holds the text (later elements may be tool calls
/// or media references we don't care about).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<Value>),
}

/// Extract plain utterance text from a content payload.
///
/// Any shape mismatch (empty part list, non-string first part) degrades
/// to an empty string rather than an error; callers drop empty text.
pub fn normalize_content(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(s) => s.trim().to_string(),
        MessageContent::Parts(parts) => match parts.first() {
            Some(Value::String(s)) => s.trim().to_string(),
            _ => String::new(),
        },
    }
}
