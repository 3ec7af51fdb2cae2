// libpn532/src/protocol/responses/firmware.rs

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode GetFirmwareVersion response (echo 0x03)
/// Layout: echo(1) + ic(1) + version(1) + revision(1) + support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::ensure_len(data, 5)?;
    Ok(FirmwareVersion {
        ic: data[1],
        version: data[2],
        revision: data[3],
        support: data[4],
    })
}
