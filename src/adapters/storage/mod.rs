//! Snapshot storage adapters.
//!
//! Implementations of the SnapshotStore port for persisting conversation
//! snapshots.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStore** - One JSON file per conversation on disk
//! - **InMemorySnapshotStore** - Map-backed store (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotStore, InMemorySnapshotStore};
//!
//! // Production: file-based storage
//! let store = FileSnapshotStore::new("./data/snapshots");
//!
//! // Testing: in-memory storage
//! let store = InMemorySnapshotStore::new();
//! ```

mod file_snapshot_store;
mod in_memory_snapshot_store;

pub use file_snapshot_store::FileSnapshotStore;
pub use in_memory_snapshot_store::InMemorySnapshotStore;
