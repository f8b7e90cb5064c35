//! Transcript enhancement
//!
//! Optional post-processing pass that rewrites a raw user utterance into
//! a more readable form via a chat-completions call. Every call is made
//! at most once; callers fall back to the raw text on any failure.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Rewrites raw utterance text for readability
#[async_trait::async_trait]
pub trait TranscriptEnhancer: Send + Sync {
    /// One best-effort enhancement attempt, no retries
    async fn enhance(&self, text: &str) -> Result<String>;
}

/// Pass-through enhancer used when enhancement is disabled or no API key
/// is configured
pub struct NoopEnhancer;

#[async_trait::async_trait]
impl TranscriptEnhancer for NoopEnhancer {
    async fn enhance(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

const ENHANCE_INSTRUCTION: &str = "Enhance the transcript to be more readable and natural.";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Enhancer backed by an OpenAI-compatible chat-completions endpoint
pub struct OpenAiEnhancer {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiEnhancer {
    pub fn new(api_base: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            api_key,
            model,
        }
    }
}

#[async_trait::async_trait]
impl TranscriptEnhancer for OpenAiEnhancer {
    async fn enhance(&self, text: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ENHANCE_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .json(&payload)
            .send()
            .await
            .context("Failed to send enhancement request")?
            .error_for_status()
            .context("Enhancement request rejected")?;

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to deserialize enhancement response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .context("Enhancement response contained no choices")?;

        Ok(choice.message.content)
    }
}
