//! Transcript assembly
//!
//! This module provides:
//! - `TranscriptEntry` / `Role`: the durable entry shape
//! - `TranscriptStore`: the shared append-only conversation log
//! - `normalize_content`: extraction of plain text from the
//!   heterogeneous content shapes the pipeline emits

mod entry;
mod normalize;
mod store;

pub use entry::{Role, TranscriptEntry};
pub use normalize::{normalize_content, MessageContent};
pub use store::TranscriptStore;
