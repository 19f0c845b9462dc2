//! Time and randomness sources used when building claims.
//!
//! The signer and verifier never read the system clock or the RNG directly;
//! they go through these traits so tests can pin exact claim values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait Clock: Send + Sync {
    /// Current time as seconds since the Unix epoch.
    fn now(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    timestamp: i64,
}

impl FixedClock {
    #[must_use]
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self { timestamp }
    }

    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::from_timestamp(instant.timestamp())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.timestamp
    }
}

pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> String;
}

/// Random UUID v4 nonces from the OS CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidNonceSource;

impl NonceSource for UuidNonceSource {
    fn next_nonce(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always hands out the same nonce. Only useful for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedNonce {
    nonce: String,
}

impl FixedNonce {
    pub fn new(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
        }
    }
}

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> String {
        self.nonce.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_system_clock_is_close_to_now() {
        let before = Utc::now().timestamp();
        let now = SystemClock.now();
        let after = Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant.timestamp());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_uuid_nonces_are_unique_v4() {
        let source = UuidNonceSource;
        let nonces: HashSet<String> = (0..100).map(|_| source.next_nonce()).collect();
        assert_eq!(nonces.len(), 100);

        for nonce in &nonces {
            let parsed = Uuid::parse_str(nonce).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn test_fixed_nonce() {
        let source = FixedNonce::new("n-1");
        assert_eq!(source.next_nonce(), "n-1");
        assert_eq!(source.next_nonce(), "n-1");
    }
}
