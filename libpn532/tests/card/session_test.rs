#[path = "../common/mod.rs"]
mod common;

use libpn532::card::{Session, SessionState};
use libpn532::config::SessionConfig;
use libpn532::test_support::SimulatedCard;
use libpn532::types::Key;
use libpn532::{Error, ErrorKind};

#[test]
fn uid_folds_first_five_bytes() {
    let card = SimulatedCard::with_uid(&[0x04, 0x1A, 0x2B, 0x3C, 0x4D, 0x00, 0x00]);
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    assert_eq!(session.read_uid_numeric(&mut dev).unwrap(), 0x041A2B3C4D);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn uid_read_without_card_is_no_target() {
    let card = SimulatedCard::new();
    card.remove();
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    let err = session.read_uid_numeric(&mut dev).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoTarget);
}

#[test]
fn auth_failure_short_circuits_read() {
    common::init_logger();
    let card = SimulatedCard::new();
    card.set_key(Key::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]));
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();

    assert!(matches!(
        session.read_payload(&mut dev),
        Err(Error::CardStatus { .. })
    ));
    // only the authentication reached the card
    assert_eq!(card.sub_commands(), vec![0x60]);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn auth_failure_short_circuits_write() {
    let card = SimulatedCard::new();
    card.set_key(Key::from_bytes([0x00; 6]));
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();

    assert!(session.write_payload(&mut dev, b"HELLO").is_err());
    assert_eq!(card.sub_commands(), vec![0x60]);
    assert_eq!(card.block(8), [0u8; 16]);
}

#[test]
fn custom_key_and_layout() {
    let key = Key::from_bytes([0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7]);
    let card = SimulatedCard::new();
    card.set_key(key);
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::new(SessionConfig {
        key,
        trailer_block: 7,
        data_blocks: vec![4, 5],
    });

    session.write_payload(&mut dev, b"sector one").unwrap();
    assert_eq!(&card.block(4)[..10], b"sector one");
    assert_eq!(card.block(5), [b' '; 16]);
    assert_eq!(session.read_payload(&mut dev).unwrap().len(), 32);
}

#[test]
fn manual_block_sequence() {
    let card = SimulatedCard::new();
    card.set_block(10, *b"block ten here!!");
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();

    session.ensure_card(&mut dev).unwrap();
    session.authenticate_sector(&mut dev, 11, &Key::DEFAULT).unwrap();
    assert_eq!(session.state(), SessionState::Authenticated);
    let block = session.read_block(&mut dev, 10).unwrap();
    assert_eq!(block.as_bytes(), b"block ten here!!");

    session.write_block(&mut dev, 8, b"0123456789ABCDEF").unwrap();
    assert_eq!(&card.block(8), b"0123456789ABCDEF");
}

#[test]
fn block_outside_sector_drops_authentication() {
    let card = SimulatedCard::new();
    let mut dev = card.initialized_device().unwrap();
    let mut session = Session::default();
    session.ensure_card(&mut dev).unwrap();
    session.authenticate_sector(&mut dev, 11, &Key::DEFAULT).unwrap();

    assert!(matches!(
        session.read_block(&mut dev, 12),
        Err(Error::CardStatus { .. })
    ));
    assert_eq!(session.state(), SessionState::Idle);
}
