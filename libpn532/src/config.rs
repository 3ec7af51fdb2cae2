// libpn532/src/config.rs

//! Configuration for the bus, protocol timing and card session.
//!
//! Every constant the driver depends on lives here with a `Default` impl
//! so callers can override a single field without restating the rest.

use crate::constants::{DEFAULT_DATA_BLOCKS, DEFAULT_TRAILER_BLOCK, MIFARE_BLOCK_LEN};
use crate::types::Key;
use crate::utils::timeout::{
    DEFAULT_ACK_TIMEOUT_MS, DEFAULT_DETECT_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_RESPONSE_TIMEOUT_MS,
};
use crate::{Error, Result};

/// Bit order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI clock polarity/phase mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiMode {
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

/// Bus setup applied once at startup by concrete transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusConfig {
    pub clock_hz: u32,
    pub mode: SpiMode,
    pub bit_order: BitOrder,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            clock_hz: 1_000_000,
            mode: SpiMode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

/// Poll interval and per-phase timeouts, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    pub poll_interval_ms: u64,
    pub ack_timeout_ms: u64,
    pub response_timeout_ms: u64,
    /// Response budget for target detection, which waits on the RF field.
    pub detect_timeout_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            ack_timeout_ms: DEFAULT_ACK_TIMEOUT_MS,
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
            detect_timeout_ms: DEFAULT_DETECT_TIMEOUT_MS,
        }
    }
}

/// Which sector the session authenticates against and which blocks carry
/// the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub key: Key,
    pub trailer_block: u8,
    pub data_blocks: Vec<u8>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: Key::DEFAULT,
            trailer_block: DEFAULT_TRAILER_BLOCK,
            data_blocks: DEFAULT_DATA_BLOCKS.to_vec(),
        }
    }
}

impl SessionConfig {
    /// Payload size in bytes (16 per data block).
    pub fn payload_len(&self) -> usize {
        self.data_blocks.len() * MIFARE_BLOCK_LEN
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_blocks.is_empty() {
            return Err(Error::InvalidConfig("no data blocks configured".into()));
        }
        if self.data_blocks.contains(&self.trailer_block) {
            return Err(Error::InvalidConfig(format!(
                "data blocks overlap the sector trailer {}",
                self.trailer_block
            )));
        }
        Ok(())
    }
}

/// Aggregate configuration accepted by [`crate::reader::Reader`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pn532Config {
    pub bus: BusConfig,
    pub timing: TimingConfig,
    pub session: SessionConfig,
}
