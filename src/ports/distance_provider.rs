//! Distance provider port - Interface for route measurement.
//!
//! The dialog needs driving distance and time for each leg of a trip
//! (base to pickup, pickup to destination, optional third stop, return).
//! Implementations call a routing service; the application layer awaits
//! the legs sequentially and substitutes a configured fallback leg when
//! a call fails, so no error from this port ever reaches the customer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for measuring one driving leg between two street addresses.
#[async_trait]
pub trait DistanceProvider: Send + Sync {
    /// Measures the driving route from `origin` to `destination`.
    async fn measure(&self, origin: &str, destination: &str) -> Result<RouteLeg, DistanceError>;
}

/// One measured driving leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Driving distance in miles.
    pub miles: f64,

    /// Driving time in hours.
    pub hours: f64,

    /// Whether the route crosses a toll road.
    pub has_tolls: bool,
}

/// Errors from route measurement.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DistanceError {
    /// The provider could not resolve an address.
    #[error("address not found: {address}")]
    AddressNotFound {
        /// The address that failed to resolve.
        address: String,
    },

    /// The provider did not answer within the configured timeout.
    #[error("route lookup timed out after {timeout_secs}s")]
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

impl DistanceError {
    /// Whether retrying the same leg could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DistanceError::Timeout { .. } | DistanceError::Network(_)
        )
    }
}

impl From<DistanceError> for DomainError {
    fn from(err: DistanceError) -> Self {
        DomainError::new(ErrorCode::DistanceProviderError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn DistanceProvider) {}
    }

    #[test]
    fn transient_failures_are_retryable() {
        assert!(DistanceError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(DistanceError::Network("reset".into()).is_retryable());

        assert!(!DistanceError::AddressNotFound {
            address: "nowhere".into()
        }
        .is_retryable());
        assert!(!DistanceError::Provider("bad key".into()).is_retryable());
    }

    #[test]
    fn errors_convert_to_domain_errors() {
        let err: DomainError = DistanceError::Timeout { timeout_secs: 10 }.into();
        assert_eq!(err.code, ErrorCode::DistanceProviderError);
        assert!(err.message.contains("timed out"));
    }
}
