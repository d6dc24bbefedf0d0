//! Token error types
//!
//! Every parse, verify and extract failure is surfaced as a `TokenError`.
//! The three malformed/forged variants can be treated as one "invalid token"
//! category through [`TokenError::is_invalid_token`].

use thiserror::Error;

use crate::domain::entities::token::TokenKind;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Key derivation failed: {reason}")]
    KeyDerivation { reason: String },

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token type: expected {expected}, got {actual}")]
    InvalidTokenType { expected: TokenKind, actual: String },

    #[error("Expiry for {kind} tokens must be positive")]
    InvalidExpiry { kind: TokenKind },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// True for malformed, forged, or structurally incomplete tokens
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidTokenFormat | TokenError::InvalidSignature | TokenError::InvalidClaims
        )
    }

    /// Stable error code for the presentation layer
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::KeyDerivation { .. } => "KEY_DERIVATION_FAILED",
            TokenError::InvalidExpiry { .. } => "INVALID_EXPIRY",
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::InvalidClaims => "INVALID_TOKEN",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenType { .. } => "INVALID_TOKEN_TYPE",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
            _ => TokenError::InvalidTokenFormat,
        }
    }
}
