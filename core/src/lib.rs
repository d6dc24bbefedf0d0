//! # Health Tracker Core
//!
//! Core domain layer for the Health Tracker backend. It mints and validates
//! HS256-signed session tokens (access, refresh, registration) that carry a
//! username and a role claim.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
