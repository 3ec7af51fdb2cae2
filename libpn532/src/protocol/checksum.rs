// libpn532/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS): LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) over the frame identifier and data:
/// TFI + sum(data) + DCS == 0 (mod 256)
pub fn dcs(tfi: u8, data: &[u8]) -> u8 {
    let sum = data.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// True when `len` and `lcs` satisfy the length checksum relation.
pub fn lcs_valid(len: u8, lcs: u8) -> bool {
    len.wrapping_add(lcs) == 0
}

/// True when `tfi`, `data` and `dcs` satisfy the data checksum relation.
pub fn dcs_valid(tfi: u8, data: &[u8], dcs: u8) -> bool {
    data.iter()
        .fold(tfi, |acc, &b| acc.wrapping_add(b))
        .wrapping_add(dcs)
        == 0
}
