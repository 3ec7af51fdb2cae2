// libpn532/src/device/builder.rs

use crate::config::TimingConfig;
use crate::device::handle::{Pn532, Uninitialized};
use crate::transport::{Bus, Clock, StdClock};
use crate::{Error, Result};

/// Helper to construct a Pn532 with optional configuration.
#[derive(Default)]
pub struct Pn532Builder {
    bus: Option<Box<dyn Bus>>,
    clock: Option<Box<dyn Clock>>,
    timing: TimingConfig,
}

impl Pn532Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the bus (e.g. `RppalBus` or `MockBus`)
    pub fn with_bus(mut self, bus: Box<dyn Bus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Override the clock; defaults to [`StdClock`]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Consume the builder and return an uninitialized handle.
    /// Requires a bus; the poll interval must be non-zero.
    pub fn build_uninitialized(self) -> Result<Pn532<Uninitialized>> {
        let bus = self
            .bus
            .ok_or_else(|| Error::InvalidConfig("no bus provided".into()))?;
        if self.timing.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig("poll interval must be non-zero".into()));
        }
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(StdClock::new()));
        Ok(Pn532::new(bus, clock, self.timing))
    }
}
