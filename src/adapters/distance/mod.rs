//! Distance provider adapters.

mod mock_provider;

pub use mock_provider::MockDistanceProvider;
