//! Mock payment tokenizer for testing.
//!
//! Hands out scripted tokens without touching a payment provider. Card
//! numbers passed in are never stored; only the count of calls is kept.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{CardDetails, CardToken, PaymentTokenizer, TokenizeError};

/// Scripted tokenizer. Returns queued results in order, then a fixed
/// default token.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentTokenizer {
    results: Arc<Mutex<VecDeque<Result<CardToken, TokenizeError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPaymentTokenizer {
    /// Creates a tokenizer that vaults everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful token.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(Ok(CardToken {
            token: token.into(),
        }));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: TokenizeError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of tokenization attempts so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl PaymentTokenizer for MockPaymentTokenizer {
    async fn tokenize_card(&self, _card: CardDetails) -> Result<CardToken, TokenizeError> {
        *self.call_count.lock().unwrap() += 1;
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(CardToken {
                token: "tok_mock".to_string(),
            }))
    }
}
