//! Unit tests for the token service


use std::sync::Arc;

use chrono::{TimeZone, Utc};

use super::{ManualClock, TokenService, TokenServiceConfig};

pub(super) const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hs256";
pub(super) const OTHER_SECRET: &str = "another-secret-that-is-long-enough-for-hs256";

/// Whole-second start instant so expiry arithmetic stays exact
pub(super) const T0: i64 = 1_700_000_000;

pub(super) fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new(TEST_SECRET)).expect("Failed to create token service")
}

pub(super) fn create_clocked_service() -> (TokenService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.timestamp_opt(T0, 0).unwrap()));
    let service = TokenService::with_clock(TokenServiceConfig::new(TEST_SECRET), clock.clone())
        .expect("Failed to create token service");
    (service, clock)
}
