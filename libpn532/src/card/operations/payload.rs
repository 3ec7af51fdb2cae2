use crate::device::{Initialized, Pn532};
use crate::types::{BlockData, Payload};
use crate::Result;

use super::{read_block, write_block};

/// Read `blocks` in order and concatenate them. The first failure aborts;
/// nothing partial is returned.
pub fn read_blocks(device: &mut Pn532<Initialized>, blocks: &[u8]) -> Result<Payload> {
    let data = blocks
        .iter()
        .map(|&block| read_block(device, block))
        .collect::<Result<Vec<BlockData>>>()?;
    Ok(Payload::from_blocks(&data))
}

/// Write `payload` across `blocks`, one 16-byte chunk per block. Not
/// transactional: blocks written before a failure keep their new contents.
pub fn write_blocks(device: &mut Pn532<Initialized>, blocks: &[u8], payload: &Payload) -> Result<()> {
    for (&block, data) in blocks.iter().zip(payload.blocks()) {
        write_block(device, block, &data)?;
    }
    Ok(())
}
