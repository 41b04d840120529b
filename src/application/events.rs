//! Output events on a conversation's channel.
//!
//! The dialog core only produces an ordered message log and stage moves;
//! these events are how a front end hears about them. Presentation replays
//! `MessageAppended` entries with their recorded delays, the rest are
//! named UI signals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Speaker, Stage};

/// One event on a conversation's output channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A transcript entry was appended.
    MessageAppended {
        speaker: Speaker,
        content: String,
        /// Suggested pause before showing this entry, in milliseconds.
        delay_ms: u64,
    },

    /// The dialog moved to a new stage.
    StageChanged { stage: Stage },

    /// A priced estimate is stored on the record and ready to present.
    EstimateReady { total: Option<Decimal> },

    /// The external scheduling page should open.
    SchedulerOpened,

    /// The office phone dialer should open.
    DialerPrompted { phone: String },

    /// The conversation was wiped and greeted from the top.
    ConversationRestarted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn events_tag_their_type() {
        let event = SessionEvent::StageChanged {
            stage: Stage::GetNameInitial,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"stage_changed\""));
    }

    #[test]
    fn message_events_carry_the_delay() {
        let event = SessionEvent::MessageAppended {
            speaker: Speaker::Bot,
            content: "Welcome!".to_string(),
            delay_ms: 25,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"delay_ms\":25"));
        assert!(json.contains("\"speaker\":\"bot\""));
    }

    #[test]
    fn estimate_events_round_trip() {
        let event = SessionEvent::EstimateReady {
            total: Some(dec!(1519.62)),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
