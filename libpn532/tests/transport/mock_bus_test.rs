use libpn532::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ};
use libpn532::transport::{Bus, MockBus};

#[test]
fn data_write_bracket_is_recorded() {
    let mut m = MockBus::new();
    m.select_low().unwrap();
    m.exchange(SPI_DATA_WRITE).unwrap();
    m.write_all(&[0x00, 0x00, 0xFF]).unwrap();
    m.select_high().unwrap();
    assert_eq!(m.written(), vec![vec![0x00, 0x00, 0xFF]]);
}

#[test]
fn status_then_data_read() {
    let mut m = MockBus::new();
    m.push_reply(vec![0xAB, 0xCD]);

    m.select_low().unwrap();
    m.exchange(SPI_STATUS_READ).unwrap();
    assert_eq!(m.exchange(0).unwrap(), SPI_READY);
    m.select_high().unwrap();

    let mut buf = [0u8; 2];
    m.select_low().unwrap();
    m.exchange(SPI_DATA_READ).unwrap();
    m.read_into(&mut buf).unwrap();
    m.select_high().unwrap();

    assert_eq!(buf, [0xAB, 0xCD]);
    assert_eq!(m.pending_replies(), 0);
    assert_eq!(m.transactions(), 2);
}

#[test]
fn exchange_failure_is_bus_error() {
    let mut m = MockBus::new();
    m.set_fail_exchange(true);
    m.select_low().unwrap();
    let err = m.exchange(SPI_STATUS_READ).unwrap_err();
    assert_eq!(err.kind(), libpn532::ErrorKind::Bus);
    m.select_high().unwrap();
}
