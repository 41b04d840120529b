//! Conversation message log.
//!
//! The dialog engine appends to an ordered log; presentation replays it
//! with the recorded delays. The core never sleeps: `delay_ms` is advisory
//! pacing for the renderer, and the log is already final when a turn ends.

use serde::{Deserialize, Serialize};

/// Who produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// Scripted dialog output.
    Bot,
    /// Echo of the customer's answer (option label or typed text).
    Customer,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    speaker: Speaker,
    content: String,
    /// Suggested pause before showing this entry, in milliseconds.
    delay_ms: u64,
}

impl Message {
    /// Creates a bot message shown without a pause.
    pub fn bot(content: impl Into<String>) -> Self {
        Self::bot_after(content, 0)
    }

    /// Creates a bot message with a presentation delay.
    pub fn bot_after(content: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            speaker: Speaker::Bot,
            content: content.into(),
            delay_ms,
        }
    }

    /// Creates a customer echo entry.
    pub fn customer(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Customer,
            content: content.into(),
            delay_ms: 0,
        }
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_bot(&self) -> bool {
        self.speaker == Speaker::Bot
    }
}
