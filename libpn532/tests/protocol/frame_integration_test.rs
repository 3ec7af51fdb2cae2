#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;

#[test]
fn detect_frame_payload_matches_fixture() {
    let uid = common::fixtures::sample_uid_bytes();
    let frame = common::fixtures::detect_frame(&uid);
    let payload = Frame::decode_response(&frame).expect("frame decode");
    assert_eq!(payload, common::fixtures::detect_payload(&uid));
}

#[test]
fn sam_configuration_frame_bytes() {
    let frame = Frame::encode_command(&[0x14, 0x01, 0x14, 0x01]).unwrap();
    assert_eq!(frame, hex::decode("0000ff05fbd4140114010200").unwrap());
}

#[test]
fn every_single_byte_flip_is_rejected() {
    let frame = common::fixtures::response_frame(&common::fixtures::firmware_payload());
    for i in 0..frame.len() {
        let mut bad = frame.clone();
        bad[i] ^= 0x01;
        assert!(Frame::decode_response(&bad).is_err(), "flip at {} accepted", i);
    }
}

#[test]
fn host_frame_is_not_a_response() {
    let frame = Frame::encode_command(&[0x02]).unwrap();
    assert!(matches!(
        Frame::decode_response(&frame),
        Err(Error::UnexpectedResponse { .. })
    ));
}

#[test]
fn truncated_frame_is_rejected() {
    let frame = common::fixtures::response_frame(&common::fixtures::sam_payload());
    for len in 0..frame.len() {
        assert!(Frame::decode_response(&frame[..len]).is_err());
    }
}
