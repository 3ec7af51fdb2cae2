use crate::device::{Initialized, Pn532};
use crate::protocol::MifareCommand;
use crate::types::BlockData;
use crate::Result;

use super::check_status;

/// Write one 16-byte block. The sector must already be authenticated.
pub fn write_block(device: &mut Pn532<Initialized>, block: u8, data: &BlockData) -> Result<()> {
    let cmd = MifareCommand::Write { block, data: *data };
    let response = device.exchange_data(&cmd.encode())?;
    check_status(&response)?;
    Ok(())
}
