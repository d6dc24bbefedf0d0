//! Main token service implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::{TokenError, TokenResult};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Service for issuing and validating HS256-signed session tokens.
///
/// Holds only immutable state after construction, so a single instance can be
/// shared across threads (for example behind an `Arc`) without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    signing_key: SigningKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("signing_key", &self.signing_key)
            .field("access_token_expiry_seconds", &self.config.access_token_expiry_seconds)
            .field("refresh_token_expiry_seconds", &self.config.refresh_token_expiry_seconds)
            .field(
                "registration_token_expiry_seconds",
                &self.config.registration_token_expiry_seconds,
            )
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service using the wall clock
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance, `TokenError::KeyDerivation` if the
    /// secret cannot be used as an HS256 key, or `TokenError::InvalidExpiry`
    /// if any token kind is configured with a non-positive lifetime
    pub fn new(config: TokenServiceConfig) -> TokenResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new token service reading time from `clock`
    pub fn with_clock(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> TokenResult<Self> {
        let signing_key = SigningKey::derive(&config.jwt_secret)?;

        for kind in TokenKind::ALL {
            if config.ttl(kind) <= Duration::zero() {
                return Err(TokenError::InvalidExpiry { kind });
            }
        }

        if config.is_using_default_secret() {
            warn!("Token service is using the default development JWT secret");
        }

        // Expiry is checked against `clock` by the service itself, so the
        // library only verifies signature, algorithm and claim presence.
        // jsonwebtoken has no presence check for `iat`; deserializing into
        // `Claims` rejects tokens without it.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        debug!("Derived HS256 signing key for token service");

        Ok(Self {
            config,
            signing_key,
            validation,
            clock,
        })
    }

    /// Issues a signed token of the given kind
    ///
    /// # Arguments
    ///
    /// * `kind` - Access, refresh or registration
    /// * `username` - Subject claim
    /// * `role` - Role claim, carried verbatim
    pub fn issue(&self, kind: TokenKind, username: &str, role: &str) -> TokenResult<String> {
        let claims = Claims::new(kind, username, role, self.clock.now(), self.config.ttl(kind));
        let token = self.encode_jwt(&claims)?;

        debug!(subject = %claims.sub, kind = %kind, exp = claims.exp, "Issued token");

        Ok(token)
    }

    pub fn issue_access_token(&self, username: &str, role: &str) -> TokenResult<String> {
        self.issue(TokenKind::Access, username, role)
    }

    pub fn issue_refresh_token(&self, username: &str, role: &str) -> TokenResult<String> {
        self.issue(TokenKind::Refresh, username, role)
    }

    pub fn issue_registration_token(&self, username: &str, role: &str) -> TokenResult<String> {
        self.issue(TokenKind::Registration, username, role)
    }

    /// Issues an access token together with a refresh token for the same subject
    pub fn issue_pair(&self, username: &str, role: &str) -> TokenResult<TokenPair> {
        let access_token = self.issue_access_token(username, role)?;
        let refresh_token = self.issue_refresh_token(username, role)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_seconds,
            self.config.refresh_token_expiry_seconds,
        ))
    }

    /// Verifies the signature and structure of `token` and returns its claims.
    ///
    /// Expired tokens are still decoded; use [`TokenService::verify`] to
    /// reject them.
    pub fn decode_claims(&self, token: &str) -> TokenResult<Claims> {
        let token_data = decode::<Claims>(token, self.signing_key.decoding_key(), &self.validation)?;
        Ok(token_data.claims)
    }

    pub fn extract_username(&self, token: &str) -> TokenResult<String> {
        Ok(self.decode_claims(token)?.sub)
    }

    pub fn extract_role(&self, token: &str) -> TokenResult<String> {
        Ok(self.decode_claims(token)?.role)
    }

    pub fn extract_expiration(&self, token: &str) -> TokenResult<DateTime<Utc>> {
        Ok(self.decode_claims(token)?.expires_at())
    }

    pub fn extract_issued_at(&self, token: &str) -> TokenResult<DateTime<Utc>> {
        Ok(self.decode_claims(token)?.issued_at())
    }

    /// Checks that `token` belongs to `expected_username` and has not expired
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Authentic, unexpired, and issued to `expected_username`
    /// * `Ok(false)` - Authentic but expired, or issued to someone else
    /// * `Err(TokenError)` - Malformed or forged token
    pub fn validate(&self, token: &str, expected_username: &str) -> TokenResult<bool> {
        let claims = self.decode_claims(token)?;
        Ok(claims.sub == expected_username && !claims.is_expired_at(self.clock.now()))
    }

    /// Checks that a registration token is authentic and unexpired.
    /// The subject is not inspected.
    pub fn validate_registration(&self, token: &str) -> TokenResult<bool> {
        let claims = self.decode_claims(token)?;
        Ok(!claims.is_expired_at(self.clock.now()))
    }

    /// Verifies signature, structure and expiry in one step
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Authentic but expired
    /// * `Err(TokenError)` - Malformed or forged token
    pub fn verify(&self, token: &str) -> TokenResult<Claims> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::TokenExpired);
        }
        Ok(claims)
    }

    /// Mints a new access token from an unexpired refresh token, keeping its
    /// subject and role
    pub fn refresh_access_token(&self, refresh_token: &str) -> TokenResult<String> {
        let claims = self.verify(refresh_token)?;

        match claims.token_type {
            Some(TokenKind::Refresh) => self.issue_access_token(&claims.sub, &claims.role),
            other => Err(TokenError::InvalidTokenType {
                expected: TokenKind::Refresh,
                actual: other.map_or_else(|| "none".to_string(), |kind| kind.to_string()),
            }),
        }
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> TokenResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, self.signing_key.encoding_key())
            .map_err(|_| TokenError::TokenGenerationFailed)
    }
}
