//! HMAC-SHA256 key material for JWT signing and verification

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::TokenError;

/// Minimum secret length: HS256 keys must carry at least 256 bits
pub const MIN_SECRET_BYTES: usize = 32;

/// Symmetric key derived once from the configured secret
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Derives the key from the UTF-8 bytes of `secret`
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` - Key derived successfully
    /// * `Err(TokenError::KeyDerivation)` - Secret is empty or shorter than 256 bits
    pub fn derive(secret: &str) -> Result<Self, TokenError> {
        let bytes = secret.as_bytes();

        if bytes.is_empty() {
            return Err(TokenError::KeyDerivation {
                reason: "secret is empty".to_string(),
            });
        }
        if bytes.len() < MIN_SECRET_BYTES {
            return Err(TokenError::KeyDerivation {
                reason: format!(
                    "secret is {} bits, HS256 requires at least {} bits",
                    bytes.len() * 8,
                    MIN_SECRET_BYTES * 8
                ),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
