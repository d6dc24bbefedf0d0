//! Domain-specific error types and error handling.

mod types;


pub use types::TokenError;

pub type TokenResult<T> = Result<T, TokenError>;
