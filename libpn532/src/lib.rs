// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for PN532 NFC readers attached over SPI, with a small
//! MIFARE Classic session layer (detect, authenticate, read/write blocks).

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
