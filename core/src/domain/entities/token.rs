//! Token entities for JWT-based session authentication.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};
use ht_shared::config::auth::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_REFRESH_TOKEN_EXPIRY, DEFAULT_REGISTRATION_TOKEN_EXPIRY,
};
use serde::{Deserialize, Serialize};

/// The kinds of token the service mints. They differ only in lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token presented on every request
    Access,
    /// Long-lived token exchanged for fresh access tokens
    Refresh,
    /// Token handed out while a sign-up is being completed
    Registration,
}

impl TokenKind {
    pub const ALL: [TokenKind; 3] = [TokenKind::Access, TokenKind::Refresh, TokenKind::Registration];

    /// Lifetime of this kind of token when no override is configured
    pub fn default_ttl(&self) -> Duration {
        let seconds = match self {
            TokenKind::Access => DEFAULT_ACCESS_TOKEN_EXPIRY,
            TokenKind::Refresh => DEFAULT_REFRESH_TOKEN_EXPIRY,
            TokenKind::Registration => DEFAULT_REGISTRATION_TOKEN_EXPIRY,
        };
        Duration::seconds(seconds)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
            TokenKind::Registration => "registration",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role of the subject, carried verbatim
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Kind of token; absent on tokens minted by other issuers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenKind>,
}

impl Claims {
    /// Creates claims for a token issued at `issued_at` and living for `ttl`
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of token being minted
    /// * `username` - Subject of the token
    /// * `role` - Role claim
    /// * `issued_at` - Issuance instant, truncated to whole seconds
    /// * `ttl` - Lifetime of the token
    pub fn new(
        kind: TokenKind,
        username: impl Into<String>,
        role: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: username.into(),
            role: role.into(),
            iat,
            exp: iat.saturating_add(ttl.num_seconds()),
            token_type: Some(kind),
        }
    }

    /// A token is expired once `now` reaches its expiration second
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Expiration as a UTC instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        timestamp_to_utc(self.exp)
    }

    /// Issuance as a UTC instant
    pub fn issued_at(&self) -> DateTime<Utc> {
        timestamp_to_utc(self.iat)
    }
}

// Out-of-range values clamp to the representable bounds instead of panicking.
fn timestamp_to_utc(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap_or(if seconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Token pair returned after authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiration time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn test_default_ttls() {
        assert_eq!(TokenKind::Access.default_ttl().num_seconds(), 120);
        assert_eq!(TokenKind::Refresh.default_ttl().num_seconds(), 5 * 3600);
        assert_eq!(TokenKind::Registration.default_ttl().num_seconds(), 2 * 3600);
    }

    #[test]
    fn test_claims_new() {
        let claims = Claims::new(
            TokenKind::Access,
            "alice",
            "USER",
            at(1_700_000_000),
            TokenKind::Access.default_ttl(),
        );

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "USER");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_120);
        assert_eq!(claims.token_type, Some(TokenKind::Access));
        assert_eq!(claims.expires_at(), at(1_700_000_120));
        assert_eq!(claims.issued_at(), at(1_700_000_000));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let claims = Claims::new(TokenKind::Access, "bob", "ADMIN", at(1000), Duration::seconds(10));

        assert!(!claims.is_expired_at(at(1009)));
        assert!(claims.is_expired_at(at(1010)));
        assert!(claims.is_expired_at(at(1011)));
    }

    #[test]
    fn test_payload_shape() {
        let claims = Claims::new(TokenKind::Registration, "carol", "USER", at(0), Duration::hours(2));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "carol");
        assert_eq!(json["role"], "USER");
        assert_eq!(json["iat"], 0);
        assert_eq!(json["exp"], 7200);
        assert_eq!(json["token_type"], "registration");
    }

    #[test]
    fn test_token_type_is_optional_on_input() {
        let claims: Claims =
            serde_json::from_str(r#"{"sub":"dave","role":"USER","iat":1,"exp":2}"#).unwrap();
        assert_eq!(claims.token_type, None);

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("token_type").is_none());
    }

    #[test]
    fn test_out_of_range_timestamp_clamps() {
        let claims = Claims {
            sub: "eve".to_string(),
            role: "USER".to_string(),
            iat: 0,
            exp: i64::MAX,
            token_type: None,
        };
        assert_eq!(claims.expires_at(), DateTime::<Utc>::MAX_UTC);
    }
}
