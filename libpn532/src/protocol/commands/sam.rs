// libpn532/src/protocol/commands/sam.rs

/// SAM mode 0x01: normal mode, no SAM in use.
pub const MODE_NORMAL: u8 = 0x01;

/// Virtual card timeout in 50 ms units (0x14 * 50 ms = 1 s).
pub const TIMEOUT_1S: u8 = 0x14;

/// Encode SAMConfiguration payload (command code 0x14)
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![
        crate::constants::CMD_SAM_CONFIGURATION,
        mode,
        timeout,
        u8::from(use_irq),
    ]
}
