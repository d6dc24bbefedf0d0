//! Configuration error types

use thiserror::Error;

/// Errors raised while validating loaded configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Refusing to run in production with the default JWT secret")]
    DefaultSecretInProduction,

    #[error("Expiry must be positive: {field}")]
    NonPositiveExpiry { field: String },
}
