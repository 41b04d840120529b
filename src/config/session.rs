//! Session persistence configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for saved-session snapshots and uploads
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Hours a saved session stays resumable
    #[serde(default = "default_retention_hours")]
    pub retention_hours: i64,

    /// Directory for file-backed session snapshots
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,

    /// Maximum photos a customer may attach to one session
    #[serde(default = "default_max_photos")]
    pub max_photos: u32,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retention_hours <= 0 {
            return Err(ValidationError::InvalidRetention);
        }
        if self.snapshot_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SNAPSHOT_DIR"));
        }
        if self.max_photos == 0 {
            return Err(ValidationError::InvalidMaxPhotos);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            retention_hours: default_retention_hours(),
            snapshot_dir: default_snapshot_dir(),
            max_photos: default_max_photos(),
        }
    }
}

fn default_retention_hours() -> i64 {
    24
}

fn default_snapshot_dir() -> String {
    "./data/snapshots".to_string()
}

fn default_max_photos() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.retention_hours, 24);
        assert_eq!(config.max_photos, 5);
    }

    #[test]
    fn rejects_a_nonpositive_retention() {
        let config = SessionConfig {
            retention_hours: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_photos() {
        let config = SessionConfig {
            max_photos: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
