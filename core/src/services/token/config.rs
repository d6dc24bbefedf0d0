//! Configuration for the token service

use chrono::Duration;
use ht_shared::config::auth::{JwtConfig, DEFAULT_JWT_SECRET};

use crate::domain::entities::token::TokenKind;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret the HS256 signing key is derived from
    pub jwt_secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
    /// Registration token expiry in seconds
    pub registration_token_expiry_seconds: i64,
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Lifetime of a token of the given kind
    pub fn ttl(&self, kind: TokenKind) -> Duration {
        let seconds = match kind {
            TokenKind::Access => self.access_token_expiry_seconds,
            TokenKind::Refresh => self.refresh_token_expiry_seconds,
            TokenKind::Registration => self.registration_token_expiry_seconds,
        };
        Duration::try_seconds(seconds).unwrap_or(if seconds < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }

    pub(crate) fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            access_token_expiry_seconds: TokenKind::Access.default_ttl().num_seconds(),
            refresh_token_expiry_seconds: TokenKind::Refresh.default_ttl().num_seconds(),
            registration_token_expiry_seconds: TokenKind::Registration.default_ttl().num_seconds(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
            refresh_token_expiry_seconds: jwt.refresh_token_expiry,
            registration_token_expiry_seconds: jwt.registration_token_expiry,
        }
    }
}
