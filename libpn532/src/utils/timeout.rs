//! Default wait budgets for the ready/ACK/response phases, in milliseconds.
//! `TimingConfig::default()` is built from these.

use std::time::Duration;

/// Interval between two STATUS_READ polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Budget for the ACK frame after a command frame was written.
pub const DEFAULT_ACK_TIMEOUT_MS: u64 = 100;

/// Budget for the response frame of ordinary commands.
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Budget for the InListPassiveTarget response.
pub const DEFAULT_DETECT_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
