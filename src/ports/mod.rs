//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `DistanceProvider` - Route measurement for trip legs
//! - `NotificationDispatcher` - Lead submission and quote email delivery
//! - `PaymentTokenizer` - Card vaulting at booking time
//! - `MediaStore` - Photo uploads referenced by the record
//!
//! ## Persistence Ports
//!
//! - `SnapshotStore` - One resumable snapshot per conversation

mod distance_provider;
mod media_store;
mod notification_dispatcher;
mod payment_tokenizer;
mod snapshot_store;

pub use distance_provider::{DistanceError, DistanceProvider, RouteLeg};
pub use media_store::{MediaError, MediaStore, MediaUpload, StoredMedia};
pub use notification_dispatcher::{NotificationDispatcher, NotifyError};
pub use payment_tokenizer::{CardDetails, CardToken, PaymentTokenizer, TokenizeError};
pub use snapshot_store::{SessionSnapshot, SnapshotError, SnapshotStore};
