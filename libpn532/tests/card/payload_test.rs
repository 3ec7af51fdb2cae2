#[path = "../common/mod.rs"]
mod common;

use libpn532::card::Session;
use libpn532::test_support::SimulatedCard;

#[test]
fn hello_round_trip_is_space_padded() {
    let card = SimulatedCard::new();
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();

    session.write_payload(&mut dev, b"HELLO").unwrap();
    let payload = session.read_payload(&mut dev).unwrap();

    let mut expected = b"HELLO".to_vec();
    expected.resize(48, b' ');
    assert_eq!(payload.as_bytes(), expected.as_slice());
}

#[test]
fn sixty_bytes_store_only_forty_eight() {
    let card = SimulatedCard::new();
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    let input: Vec<u8> = (0..60u8).map(|i| b'A' + (i % 26)).collect();

    session.write_payload(&mut dev, &input).unwrap();
    assert_eq!(
        session.read_payload(&mut dev).unwrap().as_bytes(),
        &input[..48]
    );
    // blocks 8, 9, 10 hold the payload; the trailer is untouched
    assert_eq!(&card.block(10), &input[32..48]);
    assert_eq!(card.block(11), [0u8; 16]);
}

#[test]
fn partial_write_leaves_earlier_blocks() {
    let card = SimulatedCard::new();
    card.fail_write_at(9);
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    let input = [b'Z'; 48];

    assert!(session.write_payload(&mut dev, &input).is_err());
    assert_eq!(card.block(8), [b'Z'; 16]);
    assert_eq!(card.block(9), [0u8; 16]);
    assert_eq!(card.block(10), [0u8; 16]);
    // auth, write 8, failed write 9; block 10 never attempted
    assert_eq!(card.sub_commands(), vec![0x60, 0xA0, 0xA0]);
}

#[test]
fn read_failure_returns_no_partial_data() {
    let card = SimulatedCard::new();
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    session.write_payload(&mut dev, b"data").unwrap();

    card.remove();
    assert!(session.read_payload(&mut dev).is_err());
}
