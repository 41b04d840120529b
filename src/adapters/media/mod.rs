//! Media store adapters.

mod in_memory_media_store;

pub use in_memory_media_store::InMemoryMediaStore;
