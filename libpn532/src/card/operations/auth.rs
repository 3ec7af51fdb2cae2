use log::debug;

use crate::device::{Initialized, Pn532};
use crate::protocol::MifareCommand;
use crate::types::{Key, Uid};
use crate::Result;

use super::check_status;

/// Authenticate the sector holding `block` with key A.
pub fn authenticate(
    device: &mut Pn532<Initialized>,
    block: u8,
    key: &Key,
    uid: &Uid,
) -> Result<()> {
    let cmd = MifareCommand::Authenticate {
        block,
        key: *key,
        uid: uid.auth_bytes(),
    };
    let response = device.exchange_data(&cmd.encode())?;
    check_status(&response)?;
    debug!("authenticated block {} for uid {}", block, uid.to_hex());
    Ok(())
}
