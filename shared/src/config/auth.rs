//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Access tokens live for 2 minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 2 * 60;

/// Refresh tokens live for 5 hours
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 5 * 60 * 60;

/// Registration tokens live for 2 hours
pub const DEFAULT_REGISTRATION_TOKEN_EXPIRY: i64 = 2 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret the HMAC signing key is derived from
    pub secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64,

    /// Registration token expiry time in seconds
    #[serde(default = "default_registration_token_expiry")]
    pub registration_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
            registration_token_expiry: DEFAULT_REGISTRATION_TOKEN_EXPIRY,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// Missing or unparseable expiries fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seconds = |key: &str, default: i64| {
            lookup(key)
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            secret: lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            access_token_expiry: seconds("JWT_ACCESS_TOKEN_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY),
            refresh_token_expiry: seconds("JWT_REFRESH_TOKEN_EXPIRY", DEFAULT_REFRESH_TOKEN_EXPIRY),
            registration_token_expiry: seconds(
                "JWT_REGISTRATION_TOKEN_EXPIRY",
                DEFAULT_REGISTRATION_TOKEN_EXPIRY,
            ),
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in hours
    pub fn with_refresh_expiry_hours(mut self, hours: i64) -> Self {
        self.refresh_token_expiry = hours.saturating_mul(3600);
        self
    }

    /// Set registration token expiry in hours
    pub fn with_registration_expiry_hours(mut self, hours: i64) -> Self {
        self.registration_token_expiry = hours.saturating_mul(3600);
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

fn default_access_token_expiry() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY
}

fn default_refresh_token_expiry() -> i64 {
    DEFAULT_REFRESH_TOKEN_EXPIRY
}

fn default_registration_token_expiry() -> i64 {
    DEFAULT_REGISTRATION_TOKEN_EXPIRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 120);
        assert_eq!(config.refresh_token_expiry, 18000);
        assert_eq!(config.registration_token_expiry, 7200);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_seconds(300)
            .with_refresh_expiry_hours(24)
            .with_registration_expiry_hours(1);

        assert_eq!(config.access_token_expiry, 300);
        assert_eq!(config.refresh_token_expiry, 86400);
        assert_eq!(config.registration_token_expiry, 3600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_hour_builders_saturate() {
        let config = JwtConfig::default()
            .with_refresh_expiry_hours(i64::MAX)
            .with_registration_expiry_hours(i64::MIN);

        assert_eq!(config.refresh_token_expiry, i64::MAX);
        assert_eq!(config.registration_token_expiry, i64::MIN);
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("JWT_SECRET", "from-the-environment"),
            ("JWT_ACCESS_TOKEN_EXPIRY", "60"),
            ("JWT_REGISTRATION_TOKEN_EXPIRY", " 900 "),
        ]);
        let config = JwtConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.secret, "from-the-environment");
        assert_eq!(config.access_token_expiry, 60);
        assert_eq!(config.refresh_token_expiry, DEFAULT_REFRESH_TOKEN_EXPIRY);
        assert_eq!(config.registration_token_expiry, 900);
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_REFRESH_TOKEN_EXPIRY" => Some("five hours".to_string()),
            _ => None,
        });

        assert!(config.is_using_default_secret());
        assert_eq!(config.refresh_token_expiry, DEFAULT_REFRESH_TOKEN_EXPIRY);
    }

    #[test]
    fn test_deserialize_with_only_secret() {
        let config: JwtConfig = serde_json::from_str(r#"{"secret":"s"}"#).unwrap();
        assert_eq!(config.access_token_expiry, DEFAULT_ACCESS_TOKEN_EXPIRY);
    }
}
