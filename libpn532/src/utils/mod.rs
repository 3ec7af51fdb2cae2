//! Hex formatting for wire logs and the millisecond timing defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
