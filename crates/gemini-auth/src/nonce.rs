//! Nonce generation for request replay protection
//!
//! Gemini rejects any request whose nonce does not increase relative to
//! the previous request for the same key. The provider is a trait so
//! tests can pin nonce values and embedders can substitute their own
//! scheme (e.g. a persisted counter shared across processes).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of per-request nonces
///
/// Implementations must return decimal strings that do not repeat for
/// the lifetime of one API key.
pub trait NonceProvider: Send + Sync {
    /// Produce the nonce for the next request
    fn next_nonce(&self) -> String;
}

/// Default nonce provider: millisecond timestamp plus atomic counter
///
/// The raw millisecond clock can repeat when two requests land inside
/// the same tick; suffixing an atomic counter keeps nonces unique and
/// increasing even under rapid successive or concurrent calls.
#[derive(Debug, Default)]
pub struct ClockNonce {
    counter: AtomicU64,
}

impl ClockNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceProvider for ClockNonce {
    fn next_nonce(&self) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64;

        let counter = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}{:06}", timestamp, counter % 1_000_000)
    }
}
