//! Mock notification dispatcher for testing.
//!
//! Captures every lead and quote instead of delivering anything, and can
//! be told to fail the next call of either kind to exercise the retry
//! messaging in the dialog.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::conversation::Record;
use crate::ports::{NotificationDispatcher, NotifyError};

/// Capturing dispatcher. Succeeds unless an error has been queued.
#[derive(Debug, Clone, Default)]
pub struct MockNotificationDispatcher {
    lead_errors: Arc<Mutex<VecDeque<NotifyError>>>,
    quote_errors: Arc<Mutex<VecDeque<NotifyError>>>,
    leads: Arc<Mutex<Vec<Record>>>,
    quotes: Arc<Mutex<Vec<Record>>>,
}

impl MockNotificationDispatcher {
    /// Creates a dispatcher that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a failure for the next lead submission.
    pub fn with_lead_error(self, error: NotifyError) -> Self {
        self.lead_errors.lock().unwrap().push_back(error);
        self
    }

    /// Queues a failure for the next quote email.
    pub fn with_quote_error(self, error: NotifyError) -> Self {
        self.quote_errors.lock().unwrap().push_back(error);
        self
    }

    /// Leads captured so far.
    pub fn leads(&self) -> Vec<Record> {
        self.leads.lock().unwrap().clone()
    }

    /// Quotes captured so far.
    pub fn quotes(&self) -> Vec<Record> {
        self.quotes.lock().unwrap().clone()
    }

    /// Number of captured leads.
    pub fn lead_count(&self) -> usize {
        self.leads.lock().unwrap().len()
    }

    /// Number of captured quotes.
    pub fn quote_count(&self) -> usize {
        self.quotes.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationDispatcher for MockNotificationDispatcher {
    async fn send_lead(&self, record: &Record) -> Result<(), NotifyError> {
        if let Some(error) = self.lead_errors.lock().unwrap().pop_front() {
            return Err(error);
        }
        self.leads.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn send_quote(&self, record: &Record) -> Result<(), NotifyError> {
        if let Some(error) = self.quote_errors.lock().unwrap().pop_front() {
            return Err(error);
        }
        self.quotes.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_leads_and_quotes() {
        let dispatcher = MockNotificationDispatcher::new();
        let mut record = Record::default();
        record.email = Some("dana@example.com".into());

        dispatcher.send_lead(&record).await.unwrap();
        dispatcher.send_quote(&record).await.unwrap();

        assert_eq!(dispatcher.lead_count(), 1);
        assert_eq!(dispatcher.quote_count(), 1);
        assert_eq!(
            dispatcher.leads()[0].email.as_deref(),
            Some("dana@example.com")
        );
    }

    #[tokio::test]
    async fn queued_errors_fail_one_call_each() {
        let dispatcher = MockNotificationDispatcher::new()
            .with_lead_error(NotifyError::Network("reset".into()));
        let record = Record::default();

        let err = dispatcher.send_lead(&record).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(dispatcher.lead_count(), 0);

        dispatcher.send_lead(&record).await.unwrap();
        assert_eq!(dispatcher.lead_count(), 1);
    }

    #[tokio::test]
    async fn lead_and_quote_failures_are_independent() {
        let dispatcher = MockNotificationDispatcher::new().with_quote_error(
            NotifyError::Rejected {
                reason: "blocked".into(),
            },
        );
        let record = Record::default();

        dispatcher.send_lead(&record).await.unwrap();
        assert!(dispatcher.send_quote(&record).await.is_err());
    }
}
