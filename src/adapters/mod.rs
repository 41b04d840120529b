//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `distance` - Route measurement (mock)
//! - `notification` - Lead and quote delivery (mock)
//! - `payment` - Card tokenization (mock)
//! - `media` - Photo storage (in-memory)
//! - `storage` - Snapshot persistence (in-memory, file)

pub mod distance;
pub mod media;
pub mod notification;
pub mod payment;
pub mod storage;

pub use distance::MockDistanceProvider;
pub use media::InMemoryMediaStore;
pub use notification::MockNotificationDispatcher;
pub use payment::MockPaymentTokenizer;
pub use storage::{FileSnapshotStore, InMemorySnapshotStore};
