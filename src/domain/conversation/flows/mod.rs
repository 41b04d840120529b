//! Stage handlers for the guided dialog.
//!
//! Each handler consumes one customer answer, mutates the [`Record`], and
//! returns a [`Step`]: the scripted bot replies, where the conversation goes
//! next, and any side effects the application layer must carry out. Handlers
//! are pure with respect to the outside world, so every branch of the script
//! can be tested without ports or async plumbing.
//!
//! [`Record`]: crate::domain::conversation::record::Record

use rust_decimal::Decimal;

use crate::domain::conversation::message::Message;
use crate::domain::conversation::stage::Stage;

pub(crate) mod booking;
pub(crate) mod claims;
pub(crate) mod coverage;
pub(crate) mod crew;
pub(crate) mod home;
pub(crate) mod intake;
pub(crate) mod items;
pub(crate) mod locations;
pub(crate) mod packing;
pub(crate) mod questions;
pub(crate) mod single_item;

/// Where the conversation moves after a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The stage keeps waiting for a usable answer.
    Stay,
    /// The dialog advances to the given stage.
    To(Stage),
}

/// Side effects a handler asks the application layer to perform.
///
/// Handlers never touch ports themselves; they emit one of these and the
/// session fulfils it, feeding any result back through the matching
/// `apply_*` entry point on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEffect {
    /// Measure all trip legs through the distance provider.
    MeasureTravel,
    /// Present the stored estimate to the customer.
    ShowEstimate,
    /// Send the estimate to the customer and the sales inbox.
    EmailEstimate,
    /// Submit the damage claim to the claims inbox.
    SubmitClaim,
    /// Open the external scheduling page.
    OpenScheduler,
    /// Start a phone call to the office.
    OpenDialer,
    /// The conversation was wiped and greeted from the top.
    Restarted,
}

/// The outcome of one handled customer answer.
#[derive(Debug, Clone, Default)]
pub struct Step {
    replies: Vec<Message>,
    next: Advance,
    effects: Vec<DialogEffect>,
}

impl Default for Advance {
    fn default() -> Self {
        Advance::Stay
    }
}

impl Step {
    /// A step that keeps the conversation on the current stage.
    pub fn stay() -> Self {
        Step::default()
    }

    /// A step that advances the conversation to `stage`.
    pub fn to(stage: Stage) -> Self {
        Step {
            next: Advance::To(stage),
            ..Step::default()
        }
    }

    /// Appends a bot reply shown immediately.
    pub fn say(mut self, content: impl Into<String>) -> Self {
        self.replies.push(Message::bot(content));
        self
    }

    /// Appends a bot reply shown after a typing pause.
    pub fn say_after(mut self, content: impl Into<String>, delay_ms: u64) -> Self {
        self.replies.push(Message::bot_after(content, delay_ms));
        self
    }

    /// Appends a side effect for the application layer.
    pub fn effect(mut self, effect: DialogEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn replies(&self) -> &[Message] {
        &self.replies
    }

    pub fn next(&self) -> Advance {
        self.next
    }

    pub fn effects(&self) -> &[DialogEffect] {
        &self.effects
    }

    pub fn into_parts(self) -> (Vec<Message>, Advance, Vec<DialogEffect>) {
        (self.replies, self.next, self.effects)
    }
}

// ─── Shared script formatting ───

/// Renders a flight count the way the scripts speak about stairs.
pub(crate) fn stairs_label(flights: u32) -> String {
    match flights {
        0 => "No stairs".to_string(),
        1 => "1 flight".to_string(),
        n => format!("{n} flights"),
    }
}

/// Joins labels into an "A, B, or C" phrase.
pub(crate) fn join_or(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}

/// Formats a dollar amount with cents and thousands separators.
pub(crate) fn format_usd(amount: Decimal) -> String {
    let fixed = format!("{amount:.2}");
    match fixed.split_once('.') {
        Some((whole, cents)) => format!("{}.{cents}", group_thousands(whole)),
        None => group_thousands(&fixed),
    }
}

/// Formats a whole dollar amount with thousands separators.
pub(crate) fn format_whole_usd(amount: i64) -> String {
    group_thousands(&amount.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && ch.is_ascii_digit() && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    mod step_builders {
        use super::*;

        #[test]
        fn stay_carries_no_replies_or_effects() {
            let step = Step::stay();

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies().is_empty());
            assert!(step.effects().is_empty());
        }

        #[test]
        fn replies_keep_their_order_and_delays() {
            let step = Step::to(Stage::GetEmail)
                .say("First")
                .say_after("Second", 50);

            let (replies, next, _) = step.into_parts();
            assert_eq!(next, Advance::To(Stage::GetEmail));
            assert_eq!(replies.len(), 2);
            assert_eq!(replies[0].content(), "First");
            assert_eq!(replies[0].delay_ms(), 0);
            assert_eq!(replies[1].delay_ms(), 50);
        }

        #[test]
        fn effects_accumulate() {
            let step = Step::stay()
                .effect(DialogEffect::OpenDialer)
                .effect(DialogEffect::ShowEstimate);

            assert_eq!(
                step.effects(),
                [DialogEffect::OpenDialer, DialogEffect::ShowEstimate]
            );
        }
    }

    mod formatting {
        use super::*;

        #[test]
        fn stairs_labels_read_naturally() {
            assert_eq!(stairs_label(0), "No stairs");
            assert_eq!(stairs_label(1), "1 flight");
            assert_eq!(stairs_label(3), "3 flights");
        }

        #[test]
        fn join_or_handles_each_list_shape() {
            assert_eq!(join_or(&[]), "");
            assert_eq!(join_or(&["hot tubs"]), "hot tubs");
            assert_eq!(join_or(&["hot tubs", "sheds"]), "hot tubs or sheds");
            assert_eq!(
                join_or(&["hot tubs", "pool tables", "sheds"]),
                "hot tubs, pool tables, or sheds"
            );
        }

        #[test]
        fn usd_amounts_group_thousands() {
            assert_eq!(format_usd(dec!(1519.62)), "1,519.62");
            assert_eq!(format_usd(dec!(531.25)), "531.25");
            assert_eq!(format_usd(dec!(0)), "0.00");
        }

        #[test]
        fn whole_usd_amounts_group_thousands() {
            assert_eq!(format_whole_usd(25000), "25,000");
            assert_eq!(format_whole_usd(500), "500");
            assert_eq!(format_whole_usd(1500000), "1,500,000");
        }
    }
}
