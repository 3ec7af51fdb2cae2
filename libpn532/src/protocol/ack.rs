// libpn532/src/protocol/ack.rs

use crate::constants::ACK_FRAME;

/// True only for the exact six byte acknowledgement frame.
pub fn is_ack(bytes: &[u8]) -> bool {
    bytes == ACK_FRAME
}
