use libpn532::constants::{TFI_CHIP_TO_HOST, TFI_HOST_TO_CHIP};
use libpn532::protocol::{Frame, dcs, lcs};
use proptest::prelude::*;

#[test]
fn known_checksums() {
    assert_eq!(lcs(0x05), 0xFB);
    assert_eq!(dcs(TFI_HOST_TO_CHIP, &[0x14, 0x01, 0x14, 0x01]), 0x02);
    assert_eq!(dcs(TFI_HOST_TO_CHIP, &[0x02]), 0x2A);
}

proptest! {
    #[test]
    fn encoded_frames_satisfy_checksum_invariants(payload in prop::collection::vec(any::<u8>(), 1..=32)) {
        let frame = Frame::encode_with(TFI_CHIP_TO_HOST, &payload).unwrap();
        let len = frame[3];
        prop_assert_eq!(len as usize, payload.len() + 1);
        prop_assert_eq!(len.wrapping_add(frame[4]), 0);

        let body_sum = frame[5..frame.len() - 1]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        prop_assert_eq!(body_sum, 0);
        prop_assert_eq!(frame[frame.len() - 1], 0x00);
    }
}
