//! Notification dispatcher port - Interface for outbound lead delivery.
//!
//! Two messages leave the system: the lead summary for the office and the
//! itemized quote for the customer. Both are best-effort; a failure is
//! reported back into the dialog as a retry prompt and never aborts the
//! conversation.

use async_trait::async_trait;

use crate::domain::conversation::Record;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for submitting leads and quote emails.
///
/// Implementations render the record into whatever the delivery channel
/// expects; the dialog only cares whether delivery succeeded.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Submits the lead summary to the office.
    async fn send_lead(&self, record: &Record) -> Result<(), NotifyError>;

    /// Emails the itemized quote to the customer on the record.
    async fn send_quote(&self, record: &Record) -> Result<(), NotifyError>;
}

/// Errors from outbound delivery.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NotifyError {
    /// The record has no deliverable destination.
    #[error("record has no {field} to deliver to")]
    MissingDestination {
        /// The absent contact field.
        field: String,
    },

    /// The delivery endpoint rejected the submission.
    #[error("delivery rejected: {reason}")]
    Rejected {
        /// What the endpoint said.
        reason: String,
    },

    /// The endpoint did not answer within the configured timeout.
    #[error("delivery timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network failure reaching the endpoint.
    #[error("network error: {0}")]
    Network(String),
}

impl NotifyError {
    /// Whether retrying the same delivery could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NotifyError::Timeout { .. } | NotifyError::Network(_)
        )
    }
}

impl From<NotifyError> for DomainError {
    fn from(err: NotifyError) -> Self {
        DomainError::new(ErrorCode::NotificationError, err.to_string())
    }
}
