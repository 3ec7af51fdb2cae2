// libpn532/src/transport/clock.rs

//! Host timing primitives: elapsed time and a short sleep.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic clock plus sleep. The ready-poll loop is the only caller of
/// `sleep`, so a cooperative host can yield there.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;

    /// Block the caller for roughly `duration`
    fn sleep(&mut self, duration: Duration);
}

/// `std::time` backed clock.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual clock for tests: time only moves when `sleep` is called.
/// Clones share the same time so tests can inspect it after handing one
/// to a device.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    elapsed: Rc<Cell<Duration>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}
