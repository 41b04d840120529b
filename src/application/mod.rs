//! Application layer - session services over the dialog engine.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each conversation gets one session and one output channel; the domain
//! stays synchronous and the ports are only touched from here.

mod events;
mod session;

pub use events::SessionEvent;
pub use session::{ConversationSession, SessionDeps, SessionError};
