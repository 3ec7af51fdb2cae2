// libpn532/src/transport/mod.rs

pub mod clock;
pub mod link;
pub mod mock;
#[cfg(feature = "rppal")]
pub mod spi;
pub mod traits;

pub use clock::{Clock, MockClock, StdClock};
pub use link::ChipLink;
pub use mock::MockBus;
#[cfg(feature = "rppal")]
pub use spi::RppalBus;
pub use traits::Bus;
