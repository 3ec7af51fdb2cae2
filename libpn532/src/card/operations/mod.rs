//! MIFARE Classic sub-commands carried over InDataExchange. These are the
//! stateless building blocks; [`crate::card::Session`] adds the state
//! checks around them.

pub mod auth;
pub mod payload;
pub mod read;
pub mod write;

pub use auth::authenticate;
pub use payload::{read_blocks, write_blocks};
pub use read::read_block;
pub use write::write_block;

use crate::{Error, Result};

/// Split an InDataExchange result into its status and body, failing on a
/// non-zero status.
pub(crate) fn check_status(response: &[u8]) -> Result<&[u8]> {
    let (&status, rest) = response.split_first().ok_or(Error::InvalidLength {
        expected: 1,
        actual: 0,
    })?;
    if status != 0x00 {
        return Err(Error::CardStatus { status });
    }
    Ok(rest)
}
