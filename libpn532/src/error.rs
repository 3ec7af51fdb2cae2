// libpn532/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation timed out")]
    Timeout,

    #[error("no acknowledgement from chip")]
    NoAck,

    #[error("no target detected")]
    NoTarget,

    #[error("bus error: {0}")]
    Bus(String),

    // Raspberry Pi バックエンドは optional dependency
    #[cfg(feature = "rppal")]
    #[error("spi error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[cfg(feature = "rppal")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("card rejected command: status={status:#04x}")]
    CardStatus { status: u8 },

    #[error("invalid session state: expected {expected}, got {actual}")]
    InvalidState {
        expected: crate::card::SessionState,
        actual: crate::card::SessionState,
    },

    #[error("block data must be 16 bytes, got {actual}")]
    InvalidBlockLength { actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Coarse classification of [`Error`] so callers can tell a missing card
/// from a corrupted frame without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Ready, acknowledgement or response not received within its budget
    Timeout,
    /// Header, length or checksum mismatch
    Malformed,
    /// Echoed command code or card status reported a failure
    ProtocolMismatch,
    /// Caller bug detected before any bus traffic
    Precondition,
    /// Detection completed but no target was present
    NoTarget,
    /// Underlying transport failure
    Bus,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Timeout | Error::NoAck => ErrorKind::Timeout,
            Error::NoTarget => ErrorKind::NoTarget,
            Error::Bus(_) => ErrorKind::Bus,
            #[cfg(feature = "rppal")]
            Error::Spi(_) | Error::Gpio(_) => ErrorKind::Bus,
            Error::InvalidLength { .. } | Error::ChecksumMismatch { .. } | Error::FrameFormat(_) => {
                ErrorKind::Malformed
            }
            Error::UnexpectedResponse { .. } | Error::CardStatus { .. } => {
                ErrorKind::ProtocolMismatch
            }
            Error::InvalidState { .. } | Error::InvalidBlockLength { .. } | Error::InvalidConfig(_) => {
                ErrorKind::Precondition
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
