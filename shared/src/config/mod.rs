//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing secret and per-token-kind expiry windows
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use environment::Environment;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from a `.env` file (if any) and the process environment
    pub fn load() -> Self {
        // A missing .env file is normal outside local development
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from the process environment only
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Check the configuration is safe to run with in its environment
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }

        let expiries = [
            ("access_token_expiry", self.jwt.access_token_expiry),
            ("refresh_token_expiry", self.jwt.refresh_token_expiry),
            ("registration_token_expiry", self.jwt.registration_token_expiry),
        ];
        for (field, seconds) in expiries {
            if seconds <= 0 {
                return Err(ConfigError::NonPositiveExpiry {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_in_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_secret_rejected_in_production() {
        let config = AppConfig {
            environment: Environment::Production,
            jwt: JwtConfig::default(),
        };
        assert_eq!(config.validate(), Err(ConfigError::DefaultSecretInProduction));
    }

    #[test]
    fn test_custom_secret_accepted_in_production() {
        let config = AppConfig {
            environment: Environment::Production,
            jwt: JwtConfig::new("a-production-secret-of-at-least-thirty-two-bytes"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let config = AppConfig {
            environment: Environment::Development,
            jwt: JwtConfig::default().with_access_expiry_seconds(0),
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveExpiry {
                field: "access_token_expiry".to_string()
            })
        );
    }
}
