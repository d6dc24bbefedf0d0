//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HMAC-SHA256 signing key derivation from the configured secret
//! - Access, refresh and registration token issuance
//! - Signature verification, claim extraction and expiry checks

mod clock;
mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{SigningKey, MIN_SECRET_BYTES};
