//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Company phone must contain at least 10 digits")]
    InvalidPhone,

    #[error("Service radius must be positive")]
    InvalidServiceRadius,

    #[error("Distance timeout must be positive")]
    InvalidTimeout,

    #[error("Fallback leg must have positive miles and hours")]
    InvalidFallbackLeg,

    #[error("Snapshot retention must be positive")]
    InvalidRetention,

    #[error("Max photos per session must be at least 1")]
    InvalidMaxPhotos,
}
