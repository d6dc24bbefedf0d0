//! Shared configuration and common types for the Health Tracker server
//!
//! This crate provides functionality used across server modules:
//! - Configuration types (environment detection, JWT settings)
//! - Configuration error types

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig};
pub use errors::ConfigError;
