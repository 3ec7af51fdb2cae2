#[path = "../common/mod.rs"]
mod common;

use libpn532::{Error, ErrorKind};

#[test]
fn detect_target_via_mock_device() {
    common::init_logger();
    let uid = common::fixtures::sample_uid_bytes();
    let mock = common::mock_with_responses(&[common::fixtures::detect_payload(&uid)]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();

    let info = dev.detect_target().unwrap();
    assert_eq!(info.uid(), &common::fixtures::sample_uid());
    assert_eq!(info.sel_res(), 0x08);

    let sent = mock.written();
    assert_eq!(sent.len(), 2);
    assert_eq!(&sent[1][5..9], &[0xD4, 0x4A, 0x01, 0x00]);
}

#[test]
fn detect_seven_byte_uid() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let mock = common::mock_with_responses(&[common::fixtures::detect_payload(&uid)]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();
    let info = dev.detect_target().unwrap();
    assert_eq!(info.uid().as_bytes(), &uid);
    assert_eq!(info.uid().auth_bytes(), [0x04, 0x11, 0x22, 0x33]);
}

#[test]
fn detect_nothing_in_field() {
    let mock = common::mock_with_responses(&[common::fixtures::no_target_payload()]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();
    let err = dev.detect_target().unwrap_err();
    assert!(matches!(err, Error::NoTarget));
    assert_eq!(err.kind(), ErrorKind::NoTarget);
}

#[test]
fn detect_with_unsupported_uid_length() {
    let mock = common::mock_with_responses(&[common::fixtures::detect_payload(&[0x01, 0x02, 0x03])]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();
    let err = dev.detect_target().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}
