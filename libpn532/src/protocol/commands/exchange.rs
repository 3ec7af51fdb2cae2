// libpn532/src/protocol/commands/exchange.rs

/// Encode InDataExchange payload (command code 0x40): target number
/// followed by the raw bytes forwarded to the card.
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.push(crate::constants::CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}
