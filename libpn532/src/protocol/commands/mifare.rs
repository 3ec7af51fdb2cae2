// libpn532/src/protocol/commands/mifare.rs

use crate::constants::{MIFARE_AUTH_KEY_A, MIFARE_READ, MIFARE_WRITE};
use crate::types::{BlockData, Key};

/// MIFARE Classic sub-commands forwarded through InDataExchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MifareCommand {
    /// Key A authentication: block, key, first four UID bytes
    Authenticate { block: u8, key: Key, uid: [u8; 4] },
    Read { block: u8 },
    Write { block: u8, data: BlockData },
}

impl MifareCommand {
    pub fn code(&self) -> u8 {
        match self {
            Self::Authenticate { .. } => MIFARE_AUTH_KEY_A,
            Self::Read { .. } => MIFARE_READ,
            Self::Write { .. } => MIFARE_WRITE,
        }
    }

    pub fn block(&self) -> u8 {
        match self {
            Self::Authenticate { block, .. } | Self::Read { block } | Self::Write { block, .. } => {
                *block
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![self.code(), self.block()];
        match self {
            Self::Authenticate { key, uid, .. } => {
                buf.extend_from_slice(key.as_bytes());
                buf.extend_from_slice(uid);
            }
            Self::Read { .. } => {}
            Self::Write { data, .. } => buf.extend_from_slice(data.as_bytes()),
        }
        buf
    }
}
