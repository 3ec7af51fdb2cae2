// libpn532/src/protocol/commands/firmware.rs

/// Encode GetFirmwareVersion payload (command code 0x02, no arguments)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![crate::constants::CMD_GET_FIRMWARE_VERSION]
}
