use crate::device::{Initialized, Pn532};
use crate::protocol::MifareCommand;
use crate::types::BlockData;
use crate::constants::MIFARE_BLOCK_LEN;
use crate::{Error, Result};

use super::check_status;

/// Read one 16-byte block. The sector must already be authenticated.
pub fn read_block(device: &mut Pn532<Initialized>, block: u8) -> Result<BlockData> {
    let response = device.exchange_data(&MifareCommand::Read { block }.encode())?;
    let body = check_status(&response)?;
    if body.len() < MIFARE_BLOCK_LEN {
        return Err(Error::InvalidLength {
            expected: MIFARE_BLOCK_LEN,
            actual: body.len(),
        });
    }
    BlockData::try_from(&body[..MIFARE_BLOCK_LEN])
}
