// libpn532/src/types.rs

use crate::Error;
use crate::constants::{MIFARE_BLOCK_LEN, MIFARE_DEFAULT_KEY, MIFARE_KEY_LEN, PAYLOAD_PAD_BYTE};
use derive_more::Display;
use std::convert::TryFrom;

/// UID - Newtype Pattern (4, 7 or 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Valid NFCID1 lengths (single, double and triple size).
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The four bytes MIFARE Classic authentication mixes into the
    /// handshake.
    pub fn auth_bytes(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.0[..4]);
        out
    }

    /// Fold up to the first five bytes big-endian into one integer.
    pub fn to_numeric(&self) -> u64 {
        self.0
            .iter()
            .take(5)
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// MIFARE key - Newtype Pattern (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key([u8; MIFARE_KEY_LEN]);

impl Key {
    pub const DEFAULT: Self = Self(MIFARE_DEFAULT_KEY);

    pub const fn from_bytes(bytes: [u8; MIFARE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_LEN] {
        &self.0
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != MIFARE_BLOCK_LEN {
            return Err(Error::InvalidBlockLength {
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MIFARE_BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Payload spread over the configured data blocks (48 bytes by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Truncate `bytes` to `size` and pad with ASCII spaces up to `size`.
    pub fn padded(bytes: &[u8], size: usize) -> Self {
        let mut buf = Vec::with_capacity(size);
        buf.extend(bytes.iter().take(size));
        buf.resize(size, PAYLOAD_PAD_BYTE);
        Self(buf)
    }

    /// Concatenate blocks in the order given.
    pub fn from_blocks(blocks: &[BlockData]) -> Self {
        let mut buf = Vec::with_capacity(blocks.len() * MIFARE_BLOCK_LEN);
        for block in blocks {
            buf.extend_from_slice(block.as_bytes());
        }
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into 16-byte blocks. The last chunk is space padded if the
    /// payload is not a whole number of blocks.
    pub fn blocks(&self) -> Vec<BlockData> {
        self.0
            .chunks(MIFARE_BLOCK_LEN)
            .map(|chunk| {
                let mut arr = [PAYLOAD_PAD_BYTE; MIFARE_BLOCK_LEN];
                arr[..chunk.len()].copy_from_slice(chunk);
                BlockData::from_bytes(arr)
            })
            .collect()
    }

    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// Chip firmware identification returned by GetFirmwareVersion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "PN5{:02x} v{}.{}", ic, version, revision)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}
