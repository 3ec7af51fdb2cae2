use libpn532::config::TimingConfig;
use libpn532::constants::ACK_FRAME;
use libpn532::transport::{ChipLink, Clock, MockBus, MockClock};
use libpn532::utils::ms;
use libpn532::Error;

fn link(mock: &MockBus, clock: &MockClock, timing: &TimingConfig) -> ChipLink {
    ChipLink::new(Box::new(mock.clone()), Box::new(clock.clone()), timing)
}

#[test]
fn ack_timeout_follows_configured_interval() {
    let mock = MockBus::new();
    let clock = MockClock::new();
    let timing = TimingConfig {
        poll_interval_ms: 25,
        ..TimingConfig::default()
    };
    let mut l = link(&mock, &clock, &timing);

    assert!(!l.read_ack(ms(100)).unwrap());
    assert_eq!(clock.now(), ms(100));
    assert_eq!(mock.status_polls(), 5);
    assert!(!mock.is_selected());
}

#[test]
fn response_timeout_is_an_error() {
    let mock = MockBus::new();
    let clock = MockClock::new();
    let mut l = link(&mock, &clock, &TimingConfig::default());
    assert!(matches!(l.read_response(ms(30)), Err(Error::Timeout)));
    assert_eq!(clock.now(), ms(30));
}

#[test]
fn slow_chip_is_still_read() {
    let mock = MockBus::new();
    mock.push_reply(ACK_FRAME.to_vec());
    mock.set_not_ready_polls(5);
    let clock = MockClock::new();
    let mut l = link(&mock, &clock, &TimingConfig::default());

    assert!(l.read_ack(ms(100)).unwrap());
    assert_eq!(clock.now(), ms(50));
}
