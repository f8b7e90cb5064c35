use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::entry::TranscriptEntry;

/// Append-only conversation log shared between the session and its
/// event-correlator task.
///
/// Cloning is cheap and shares the same underlying log. Appends take the
/// lock once per entry, so concurrent handlers never interleave
/// mid-operation.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl TranscriptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries with empty (or whitespace-only) text are
    /// silently dropped; returns whether the entry was stored.
    pub async fn append(&self, entry: TranscriptEntry) -> bool {
        if entry.text.trim().is_empty() {
            return false;
        }
        let mut entries = self.entries.lock().await;
        entries.push(entry);
        true
    }

    /// Number of entries stored so far
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Copy of the current entries, in insertion order
    pub async fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().await.clone()
    }

    /// Write the log to `path` as a JSON array (4-space indent, UTF-8),
    /// overwriting any previous file.
    pub async fn flush(&self, path: &Path) -> Result<()> {
        let entries = self.entries.lock().await;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries
            .serialize(&mut serializer)
            .context("Failed to serialize transcript")?;

        tokio::fs::write(path, buf)
            .await
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;

        info!(
            "Saved {} transcript entries to {}",
            entries.len(),
            path.display()
        );

        Ok(())
    }
}
