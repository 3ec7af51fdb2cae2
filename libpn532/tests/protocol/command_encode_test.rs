use libpn532::protocol::{Command, MifareCommand};
use libpn532::types::{BlockData, Key};

#[test]
fn sam_configuration_payload() {
    assert_eq!(Command::sam_normal().encode(), vec![0x14, 0x01, 0x14, 0x01]);
}

#[test]
fn detect_payload() {
    assert_eq!(
        Command::detect_single_type_a().encode(),
        vec![0x4A, 0x01, 0x00]
    );
}

#[test]
fn authenticate_through_exchange() {
    let auth = MifareCommand::Authenticate {
        block: 11,
        key: Key::DEFAULT,
        uid: [0x04, 0x1A, 0x2B, 0x3C],
    };
    let payload = Command::mifare(&auth).encode();
    assert_eq!(
        payload,
        vec![
            0x40, 0x01, 0x60, 0x0B, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x04, 0x1A, 0x2B, 0x3C
        ]
    );
}

#[test]
fn read_and_write_sub_commands() {
    assert_eq!(MifareCommand::Read { block: 8 }.encode(), vec![0x30, 0x08]);

    let data = BlockData::from_bytes(*b"HELLO           ");
    let write = MifareCommand::Write { block: 9, data }.encode();
    assert_eq!(write.len(), 18);
    assert_eq!(&write[..2], &[0xA0, 0x09]);
    assert_eq!(&write[2..], b"HELLO           ");
}

#[test]
fn response_codes_are_command_plus_one() {
    assert_eq!(Command::GetFirmwareVersion.response_code(), 0x03);
    assert_eq!(Command::sam_normal().response_code(), 0x15);
    assert_eq!(Command::detect_single_type_a().response_code(), 0x4B);
    assert_eq!(Command::mifare(&MifareCommand::Read { block: 0 }).response_code(), 0x41);
}
