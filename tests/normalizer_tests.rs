use serde_json::json;
use voicelog::{normalize_content, MessageContent, PipelineEvent, TranscriptAlternative};

#[test]
fn test_string_content_is_trimmed() {
    let content = MessageContent::Text("  Hello there \n".to_string());
    assert_eq!(normalize_content(&content), "Hello there");
}

#[test]
fn test_plain_string_passes_through() {
    let content = MessageContent::Text("already clean".to_string());
    assert_eq!(normalize_content(&content), "already clean");
}

#[test]
fn test_first_part_string_is_trimmed() {
    let content = MessageContent::Parts(vec![json!("  partial reply  "), json!("ignored")]);
    assert_eq!(normalize_content(&content), "partial reply");
}

#[test]
fn test_empty_parts_degrade_to_empty() {
    let content = MessageContent::Parts(vec![]);
    assert_eq!(normalize_content(&content), "");
}

#[test]
fn test_non_string_first_part_degrades_to_empty() {
    let content = MessageContent::Parts(vec![json!(42), json!("text after number")]);
    assert_eq!(normalize_content(&content), "");

    let content = MessageContent::Parts(vec![json!({"type": "image"})]);
    assert_eq!(normalize_content(&content), "");
}

#[test]
fn test_whitespace_only_string_normalizes_to_empty() {
    let content = MessageContent::Text("   \t ".to_string());
    assert_eq!(normalize_content(&content), "");
}

#[test]
fn test_content_deserializes_untagged() {
    let content: MessageContent = serde_json::from_str(r#""hello""#).unwrap();
    assert_eq!(normalize_content(&content), "hello");

    let content: MessageContent = serde_json::from_str(r#"["first", {"k": 1}]"#).unwrap();
    assert_eq!(normalize_content(&content), "first");
}

#[test]
fn test_primary_text_takes_first_alternative() {
    let alternatives = vec![
        TranscriptAlternative {
            text: "  hi!  ".to_string(),
        },
        TranscriptAlternative {
            text: "high".to_string(),
        },
    ];
    assert_eq!(TranscriptAlternative::primary_text(&alternatives), "hi!");
}

#[test]
fn test_primary_text_empty_when_no_alternatives() {
    assert_eq!(TranscriptAlternative::primary_text(&[]), "");
}

#[test]
fn test_pipeline_event_deserialization() {
    let event: PipelineEvent = serde_json::from_str(
        r#"{"event": "agent_speech_committed", "content": "Hello there"}"#,
    )
    .unwrap();
    match event {
        PipelineEvent::AgentSpeechCommitted { content } => {
            assert_eq!(normalize_content(&content), "Hello there");
        }
        other => panic!("unexpected event: {:?}", other),
    }

    let event: PipelineEvent = serde_json::from_str(
        r#"{"event": "final_transcript", "alternatives": [{"text": "hi!"}]}"#,
    )
    .unwrap();
    match event {
        PipelineEvent::FinalTranscript { alternatives } => {
            assert_eq!(TranscriptAlternative::primary_text(&alternatives), "hi!");
        }
        other => panic!("unexpected event: {:?}", other),
    }

    // Metrics payloads may omit counters; they default to zero.
    let event: PipelineEvent =
        serde_json::from_str(r#"{"event": "metrics_collected", "metrics": {}}"#).unwrap();
    match event {
        PipelineEvent::MetricsCollected { metrics } => {
            assert_eq!(metrics.llm_prompt_tokens, 0);
            assert_eq!(metrics.stt_audio_seconds, 0.0);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}
