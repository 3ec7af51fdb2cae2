// fixtures.rs: detect, exchange and firmware payloads shared by the integration tests

use libpn532::constants::TFI_CHIP_TO_HOST;
use libpn532::protocol::Frame;
use libpn532::types::{BlockData, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0x1A, 0x2B, 0x3C]
}

pub fn sample_uid() -> Uid {
    Uid::try_from(&sample_uid_bytes()[..]).unwrap()
}

/// InListPassiveTarget response data for one target with `uid`
pub fn detect_payload(uid: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    payload.extend_from_slice(uid);
    payload
}

pub fn detect_frame(uid: &[u8]) -> Vec<u8> {
    response_frame(&detect_payload(uid))
}

pub fn no_target_payload() -> Vec<u8> {
    vec![0x4B, 0x00]
}

/// InDataExchange read response: echo, status 0, 16 data bytes
pub fn read_payload_with_block(block: &[u8; 16]) -> Vec<u8> {
    let mut payload = vec![0x41, 0x00];
    payload.extend_from_slice(block);
    payload
}

pub fn exchange_status_payload(status: u8) -> Vec<u8> {
    vec![0x41, status]
}

pub fn sam_payload() -> Vec<u8> {
    vec![0x15]
}

pub fn firmware_payload() -> Vec<u8> {
    vec![0x03, 0x32, 0x01, 0x06, 0x07]
}

pub fn response_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode_with(TFI_CHIP_TO_HOST, payload).unwrap()
}

pub fn sample_blockdata(byte: u8) -> BlockData {
    BlockData::from_bytes([byte; 16])
}
