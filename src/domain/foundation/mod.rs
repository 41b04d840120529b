//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and helpers
//! that form the vocabulary of the Moveflow domain.

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConversationId, MediaId};
pub use money::{money_from_f64, percent_of, round_money, times_hours};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
