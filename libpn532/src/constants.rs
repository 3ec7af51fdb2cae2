// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble followed by the two start codes: 0x00 0x00 0xFF
pub const FRAME_START: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Header length: start sequence(3) + LEN(1) + LCS(1)
pub const FRAME_HEADER_LEN: usize = 5;

/// Minimal frame length: header(5) + TFI(1) + DCS(1) + postamble(1)
pub const FRAME_MIN_LEN: usize = 8;

/// Largest LEN value of a normal information frame (TFI + 254 data bytes)
pub const FRAME_MAX_LEN: usize = 255;

/// Frame identifier (TFI) for host -> chip (D4) and chip -> host (D5)
pub const TFI_HOST_TO_CHIP: u8 = 0xD4;
pub const TFI_CHIP_TO_HOST: u8 = 0xD5;

/// Acknowledgement frame sent by the chip after every accepted command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// SPI instruction bytes, sent first in every bus transaction
pub const SPI_DATA_WRITE: u8 = 0x01;
pub const SPI_STATUS_READ: u8 = 0x02;
pub const SPI_DATA_READ: u8 = 0x03;

/// Status byte returned by STATUS_READ once a reply is waiting
pub const SPI_READY: u8 = 0x01;

/// Chip command codes
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// MIFARE Classic sub-commands carried by InDataExchange
pub const MIFARE_AUTH_KEY_A: u8 = 0x60;
pub const MIFARE_READ: u8 = 0x30;
pub const MIFARE_WRITE: u8 = 0xA0;

/// MIFARE Classic block size in bytes
pub const MIFARE_BLOCK_LEN: usize = 16;

/// MIFARE key length in bytes
pub const MIFARE_KEY_LEN: usize = 6;

/// Factory default key (all 0xFF)
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF; 6];

/// Default sector trailer used for authentication and the data blocks of
/// the same sector
pub const DEFAULT_TRAILER_BLOCK: u8 = 11;
pub const DEFAULT_DATA_BLOCKS: [u8; 3] = [8, 9, 10];

/// Padding byte used when host text is shorter than the payload
pub const PAYLOAD_PAD_BYTE: u8 = b' ';

/// Baud rate / modulation selector for 106 kbps type A targets
pub const BRTY_106K_TYPE_A: u8 = 0x00;
// libpn532/src/constants.rs
