use libpn532::config::{Pn532Config, TimingConfig};
use libpn532::device::{Initialized, Pn532};
use libpn532::reader::Reader;
use libpn532::test_support::SimulatedCard;
use libpn532::transport::{MockBus, MockClock};
use libpn532::Result;

/// Install env_logger once; repeated calls are ignored.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A MockBus with the SAMConfiguration exchange queued, then ACK + response
/// for each payload in order.
pub fn mock_with_responses(payloads: &[Vec<u8>]) -> MockBus {
    let mock = MockBus::new();
    mock.push_ack_and_response(&super::fixtures::sam_payload())
        .unwrap();
    for payload in payloads {
        mock.push_ack_and_response(payload).unwrap();
    }
    mock
}

pub fn initialized_mock_device(mock: &MockBus) -> Result<Pn532<Initialized>> {
    Pn532::new(
        Box::new(mock.clone()),
        Box::new(MockClock::new()),
        TimingConfig::default(),
    )
    .initialize()
}

pub fn simulated_reader(card: &SimulatedCard) -> Result<Reader> {
    Reader::init(
        Box::new(card.clone()),
        Box::new(MockClock::new()),
        Pn532Config::default(),
    )
}
