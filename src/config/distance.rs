//! Distance provider configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for route measurement
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceConfig {
    /// Per-leg timeout in seconds before the fallback leg is used
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Miles assumed for a leg when measurement fails
    #[serde(default = "default_fallback_miles")]
    pub fallback_miles: f64,

    /// Drive hours assumed for a leg when measurement fails
    #[serde(default = "default_fallback_hours")]
    pub fallback_hours: f64,
}

impl DistanceConfig {
    /// Timeout as a `Duration` for use with `tokio::time::timeout`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate distance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.fallback_miles <= 0.0 || self.fallback_hours <= 0.0 {
            return Err(ValidationError::InvalidFallbackLeg);
        }
        Ok(())
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            fallback_miles: default_fallback_miles(),
            fallback_hours: default_fallback_hours(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fallback_miles() -> f64 {
    30.0
}

fn default_fallback_hours() -> f64 {
    0.67
}
