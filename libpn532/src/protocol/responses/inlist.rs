// libpn532/src/protocol/responses/inlist.rs

use crate::card::CardInfo;
use crate::protocol::parser;
use crate::types::Uid;
use crate::Result;

/// Decode InListPassiveTarget response for a 106 kbps type A target (echo 0x4B)
/// Layout: echo(1) + count(1) + tg(1) + sens_res(2) + sel_res(1) + uid_len(1) + uid(n)
///
/// Only the first target is decoded. Returns `(count, None)` when the chip
/// found nothing.
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<(u8, Option<CardInfo>)> {
    let count = parser::byte_at(data, 1)?;
    if count < 1 {
        return Ok((count, None));
    }

    let target_number = parser::byte_at(data, 2)?;
    let sens = parser::slice_at(data, 3, 2)?;
    let sel_res = parser::byte_at(data, 5)?;
    let uid_len = parser::byte_at(data, 6)? as usize;
    let uid = Uid::try_from(parser::slice_at(data, 7, uid_len)?)?;

    Ok((
        count,
        Some(CardInfo::new(target_number, [sens[0], sens[1]], sel_res, uid)),
    ))
}
