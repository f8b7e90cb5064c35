//! Voice session management
//!
//! This module provides the `VoiceSession` abstraction that manages:
//! - Room connection and the wait for a participant
//! - Pipeline startup, greeting, and the idle loop
//! - Event correlation into the transcript store
//! - Transcript flush and usage summary at teardown

mod config;
mod session;

pub use config::SessionConfig;
pub use session::{SessionOutcome, VoiceSession};
