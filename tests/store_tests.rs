// Tests for the append-only transcript store and its JSON flush.

use anyhow::Result;
use tempfile::TempDir;
use voicelog::{Role, TranscriptEntry, TranscriptStore};

#[tokio::test]
async fn test_append_stores_entries_in_order() {
    let store = TranscriptStore::new();

    assert!(store.append(TranscriptEntry::now(Role::Assistant, "Hello there")).await);
    assert!(store.append(TranscriptEntry::now(Role::User, "hi!")).await);

    let entries = store.snapshot().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].role, Role::Assistant);
    assert_eq!(entries[0].text, "Hello there");
    assert_eq!(entries[1].role, Role::User);
    assert_eq!(entries[1].text, "hi!");
}

#[tokio::test]
async fn test_empty_text_never_appends() {
    let store = TranscriptStore::new();

    assert!(!store.append(TranscriptEntry::now(Role::User, "")).await);
    assert!(!store.append(TranscriptEntry::now(Role::Assistant, "   \t")).await);
    assert_eq!(store.len().await, 0);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_entries_carry_rfc3339_timestamps() {
    let entry = TranscriptEntry::now(Role::User, "hi!");
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
}

#[tokio::test]
async fn test_flush_round_trips_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("conversation_log.json");

    let store = TranscriptStore::new();
    store.append(TranscriptEntry::now(Role::Assistant, "Hello there")).await;
    store.append(TranscriptEntry::now(Role::User, "hi!")).await;
    store
        .append(TranscriptEntry::now(Role::Assistant, "partial reply [interrupted]"))
        .await;

    store.flush(&path).await?;

    let raw = std::fs::read_to_string(&path)?;

    // 4-space indented JSON array
    assert!(raw.trim_start().starts_with('['));
    assert!(raw.contains("\n    {"));

    let reloaded: Vec<TranscriptEntry> = serde_json::from_str(&raw)?;
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[0].text, "Hello there");
    assert_eq!(reloaded[1].text, "hi!");
    assert_eq!(reloaded[2].text, "partial reply [interrupted]");
    assert_eq!(reloaded[0].role, Role::Assistant);
    assert_eq!(reloaded[1].role, Role::User);

    // Every object carries all three keys, including timestamp.
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    for obj in value.as_array().unwrap() {
        let obj = obj.as_object().unwrap();
        assert!(obj.contains_key("role"));
        assert!(obj.contains_key("timestamp"));
        assert!(obj.contains_key("text"));
    }

    Ok(())
}

#[tokio::test]
async fn test_flush_overwrites_previous_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("conversation_log.json");

    let store = TranscriptStore::new();
    store.append(TranscriptEntry::now(Role::User, "one")).await;
    store.append(TranscriptEntry::now(Role::User, "two")).await;
    store.flush(&path).await?;

    let fresh = TranscriptStore::new();
    fresh.append(TranscriptEntry::now(Role::User, "only")).await;
    fresh.flush(&path).await?;

    let reloaded: Vec<TranscriptEntry> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].text, "only");

    Ok(())
}

#[tokio::test]
async fn test_flush_to_missing_directory_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("log.json");

    let store = TranscriptStore::new();
    store.append(TranscriptEntry::now(Role::User, "hi!")).await;

    assert!(store.flush(&path).await.is_err());
}
