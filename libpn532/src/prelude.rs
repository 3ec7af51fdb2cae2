// libpn532/src/prelude.rs

pub use crate::card::{CardInfo, Session, SessionState};
pub use crate::config::{BusConfig, Pn532Config, SessionConfig, TimingConfig};
pub use crate::device::{Pn532, Pn532Builder};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, MifareCommand, Response};
pub use crate::reader::Reader;
pub use crate::transport::{Bus, Clock, StdClock};
pub use crate::{
    BlockData, Error, ErrorKind, FirmwareVersion, Key, Payload, Result, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
