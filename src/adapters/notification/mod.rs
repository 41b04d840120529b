//! Notification dispatcher adapters.

mod mock_dispatcher;

pub use mock_dispatcher::MockNotificationDispatcher;
