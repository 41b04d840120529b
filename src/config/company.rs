//! Company configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Company identity and service-area settings
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// Company name used in customer-facing copy
    #[serde(default = "default_name")]
    pub name: String,

    /// Dispatch base; every trip starts and ends here
    #[serde(default = "default_base_address")]
    pub base_address: String,

    /// Contact phone shown in call-us messaging
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Pickups farther than this from base are out of area
    #[serde(default = "default_service_radius_miles")]
    pub service_radius_miles: f64,
}

impl CompanyConfig {
    /// Validate company configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("COMPANY_NAME"));
        }
        if self.base_address.trim().is_empty() {
            return Err(ValidationError::MissingRequired("COMPANY_BASE_ADDRESS"));
        }
        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if digits < 10 {
            return Err(ValidationError::InvalidPhone);
        }
        if self.service_radius_miles <= 0.0 {
            return Err(ValidationError::InvalidServiceRadius);
        }
        Ok(())
    }
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_address: default_base_address(),
            phone: default_phone(),
            service_radius_miles: default_service_radius_miles(),
        }
    }
}

fn default_name() -> String {
    "Worry Free Moving".to_string()
}

fn default_base_address() -> String {
    "11715 Mahoning Avenue, North Jackson, OH 44451".to_string()
}

fn default_phone() -> String {
    "330-435-8686".to_string()
}

fn default_service_radius_miles() -> f64 {
    150.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CompanyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.name, "Worry Free Moving");
        assert_eq!(config.service_radius_miles, 150.0);
    }

    #[test]
    fn rejects_a_short_phone() {
        let config = CompanyConfig {
            phone: "330-555".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_a_nonpositive_radius() {
        let config = CompanyConfig {
            service_radius_miles: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_a_blank_name() {
        let config = CompanyConfig {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
