//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOVEFLOW_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use moveflow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Serving {} within {} miles", config.company.name, config.company.service_radius_miles);
//! ```

mod company;
mod distance;
mod error;
mod session;

pub use company::CompanyConfig;
pub use distance::DistanceConfig;
pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the quoting service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has working defaults, so a bare environment loads cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Company identity and service area
    #[serde(default)]
    pub company: CompanyConfig,

    /// Route measurement (timeout, fallback leg)
    #[serde(default)]
    pub distance: DistanceConfig,

    /// Session snapshots and photo uploads
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOVEFLOW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MOVEFLOW__COMPANY__SERVICE_RADIUS_MILES=200` -> `company.service_radius_miles = 200.0`
    /// - `MOVEFLOW__SESSION__SNAPSHOT_DIR=/var/lib/moveflow` -> `session.snapshot_dir = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOVEFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.company.validate()?;
        self.distance.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("MOVEFLOW__COMPANY__NAME");
        env::remove_var("MOVEFLOW__COMPANY__SERVICE_RADIUS_MILES");
        env::remove_var("MOVEFLOW__DISTANCE__TIMEOUT_SECS");
        env::remove_var("MOVEFLOW__SESSION__SNAPSHOT_DIR");
        env::remove_var("MOVEFLOW__SESSION__MAX_PHOTOS");
    }

    #[test]
    fn test_load_with_bare_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.company.name, "Worry Free Moving");
        assert_eq!(config.company.service_radius_miles, 150.0);
        assert_eq!(config.distance.timeout_secs, 10);
        assert_eq!(config.session.retention_hours, 24);
    }

    #[test]
    fn test_validate_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOVEFLOW__COMPANY__SERVICE_RADIUS_MILES", "200");
        env::set_var("MOVEFLOW__SESSION__MAX_PHOTOS", "8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.company.service_radius_miles, 200.0);
        assert_eq!(config.session.max_photos, 8);
        // Untouched sections keep their defaults
        assert_eq!(config.distance.fallback_miles, 30.0);
    }

    #[test]
    fn test_custom_snapshot_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOVEFLOW__SESSION__SNAPSHOT_DIR", "/var/lib/moveflow");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.session.snapshot_dir, "/var/lib/moveflow");
    }
}
