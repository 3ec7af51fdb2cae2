// libpn532/src/protocol/responses/exchange.rs

use crate::protocol::parser;
use crate::Result;

/// Decode InDataExchange response (echo 0x41)
/// Layout: echo(1) + status(1) + data(n)
pub fn decode_in_data_exchange(data: &[u8]) -> Result<(u8, Vec<u8>)> {
    let status = parser::byte_at(data, 1)?;
    Ok((status, data[2..].to_vec()))
}
