#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{Command, MifareCommand, Response};
use libpn532::{Error, ErrorKind};

#[test]
fn exchange_data_returns_status_first() {
    let block = [0x77; 16];
    let mock = common::mock_with_responses(&[common::fixtures::read_payload_with_block(&block)]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();

    let out = dev.exchange_data(&[0x30, 0x08]).unwrap();
    assert_eq!(out.len(), 17);
    assert_eq!(out[0], 0x00);
    assert_eq!(&out[1..], &block);
}

#[test]
fn execute_generic_command() {
    let mock = common::mock_with_responses(&[common::fixtures::exchange_status_payload(0x00)]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();

    let cmd = Command::mifare(&MifareCommand::Read { block: 4 });
    assert_eq!(
        dev.execute(&cmd).unwrap(),
        Response::InDataExchange {
            status: 0,
            data: vec![]
        }
    );
}

#[test]
fn missing_ack_is_reported() {
    let mock = common::mock_with_responses(&[]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();
    // chip answers with a NACK
    mock.push_reply(vec![0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);

    let err = dev.exchange_data(&[0x30, 0x08]).unwrap_err();
    assert!(matches!(err, Error::NoAck));
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(!mock.is_selected());
}

#[test]
fn corrupted_response_is_malformed() {
    let mock = common::mock_with_responses(&[]);
    let mut dev = common::initialized_mock_device(&mock).unwrap();
    mock.push_reply(libpn532::constants::ACK_FRAME.to_vec());
    let mut frame = common::fixtures::response_frame(&common::fixtures::exchange_status_payload(0));
    let last_data = frame.len() - 3;
    frame[last_data] ^= 0x40;
    mock.push_reply(frame);

    let err = dev.exchange_data(&[0x30, 0x08]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert!(!mock.is_selected());
}
