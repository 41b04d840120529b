//! Payment tokenizer port - Interface for card vaulting.
//!
//! Booking with a card exchanges the raw card details for an opaque vault
//! token; only the token is kept or forwarded. Nothing in this crate ever
//! stores a card number.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for exchanging card details for a vault token.
#[async_trait]
pub trait PaymentTokenizer: Send + Sync {
    /// Tokenizes one card. Field-level problems come back as
    /// [`TokenizeError::InvalidCard`] listing the offending fields.
    async fn tokenize_card(&self, card: CardDetails) -> Result<CardToken, TokenizeError>;
}

/// Raw card details, held only for the duration of the call.
#[derive(Debug, Clone)]
pub struct CardDetails {
    /// Card number, digits only.
    pub number: String,

    /// Expiry month (1-12).
    pub exp_month: u8,

    /// Four digit expiry year.
    pub exp_year: u16,

    /// Card security code.
    pub cvv: String,

    /// Billing postal code.
    pub postal_code: String,
}

/// Opaque vault token standing in for a stored card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardToken {
    /// The provider's token. Forwarded as-is, never interpreted.
    pub token: String,
}

/// Errors from card tokenization.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenizeError {
    /// One or more card fields failed the provider's checks.
    #[error("card details rejected: {}", fields.join(", "))]
    InvalidCard {
        /// Names of the rejected fields.
        fields: Vec<String>,
    },

    /// The provider did not answer within the configured timeout.
    #[error("tokenization timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network failure reaching the provider.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with an error of its own.
    #[error("provider error: {0}")]
    Provider(String),
}

impl TokenizeError {
    /// Whether retrying with the same details could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TokenizeError::Timeout { .. } | TokenizeError::Network(_)
        )
    }
}

impl From<TokenizeError> for DomainError {
    fn from(err: TokenizeError) -> Self {
        DomainError::new(ErrorCode::TokenizationError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_tokenizer_is_object_safe() {
        fn _accepts_dyn(_tokenizer: &dyn PaymentTokenizer) {}
    }

    #[test]
    fn invalid_card_lists_the_rejected_fields() {
        let err = TokenizeError::InvalidCard {
            fields: vec!["number".into(), "cvv".into()],
        };
        assert_eq!(err.to_string(), "card details rejected: number, cvv");
        assert!(!err.is_retryable());
    }

    #[test]
    fn transient_failures_are_retryable() {
        assert!(TokenizeError::Network("reset".into()).is_retryable());
        assert!(!TokenizeError::Provider("bad key".into()).is_retryable());
    }

    #[test]
    fn errors_convert_to_domain_errors() {
        let err: DomainError = TokenizeError::Provider("declined".into()).into();
        assert_eq!(err.code, ErrorCode::TokenizationError);
    }
}
