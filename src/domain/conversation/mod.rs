//! Conversation domain module.
//!
//! Runs the guided estimate dialog: a stage machine over the customer
//! record, a transcript of scripted messages, and the Go Back history.
//! The engine is the only writer; flow handlers stay pure.

mod aggregate;
mod engine;
mod flows;
mod history;
mod message;
pub mod options;
mod record;
mod stage;

pub use aggregate::Conversation;
pub use engine::{
    apply_claim_result, apply_email_result, apply_travel, respond, start, CustomerInput,
};
pub use flows::{Advance, DialogEffect, Step};
pub use history::{NavigationHistory, Snapshot};
pub use message::{Message, Speaker};
pub use options::{input_placeholder, label_for, options_for, StageOption, COMPANY_PHONE};
pub use record::{
    AccessClass, ClaimCoverage, CoveragePlan, HomeSizeClass, ItemCategory, PianoKind, Record,
    SafeSizing, ServiceType, TvPackingChoice, WeightClass,
};
pub use stage::Stage;
