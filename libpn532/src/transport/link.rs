// libpn532/src/transport/link.rs

//! Framed chip I/O over a [`Bus`]: ready polling, ACK detection, and frame
//! write/read. Every select bracket goes through [`ChipLink::transaction`],
//! which releases chip select on every exit path.

use std::time::Duration;

use log::trace;

use crate::config::TimingConfig;
use crate::constants::{
    ACK_FRAME, FRAME_HEADER_LEN, SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ,
};
use crate::protocol::{Frame, ack};
use crate::transport::clock::Clock;
use crate::transport::traits::Bus;
use crate::utils::{HexSlice, ms};
use crate::{Error, Result};

const MIN_POLL_INTERVAL_MS: u64 = 1;

/// Owns the bus and clock for one chip.
pub struct ChipLink {
    bus: Box<dyn Bus>,
    clock: Box<dyn Clock>,
    poll_interval: Duration,
}

impl ChipLink {
    /// A zero poll interval is raised to 1 ms so the ready loop always
    /// advances the clock.
    pub fn new(bus: Box<dyn Bus>, clock: Box<dyn Clock>, timing: &TimingConfig) -> Self {
        Self {
            bus,
            clock,
            poll_interval: ms(timing.poll_interval_ms.max(MIN_POLL_INTERVAL_MS)),
        }
    }

    /// Run `f` inside one chip-select bracket. Chip select is released
    /// whether `f` succeeds or not; an error from `f` wins over an error
    /// from releasing.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&mut dyn Bus) -> Result<T>) -> Result<T> {
        self.bus.select_low()?;
        let result = f(&mut *self.bus);
        let released = self.bus.select_high();
        let value = result?;
        released?;
        Ok(value)
    }

    /// One STATUS_READ poll.
    pub fn read_status(&mut self) -> Result<u8> {
        self.transaction(|bus| {
            bus.exchange(SPI_STATUS_READ)?;
            bus.exchange(0x00)
        })
    }

    /// Poll the status byte until the chip reports ready or `timeout`
    /// elapses. A timeout is `Ok(false)`, not an error.
    pub fn wait_ready(&mut self, timeout: Duration) -> Result<bool> {
        let start = self.clock.now();
        loop {
            let status = self.read_status()?;
            #[cfg(feature = "diagnostics")]
            trace!("status poll: {:#04x}", status);
            if status == SPI_READY {
                return Ok(true);
            }
            if self.clock.now().saturating_sub(start) >= timeout {
                return Ok(false);
            }
            self.clock.sleep(self.poll_interval);
        }
    }

    /// Wait for readiness and check that the chip sent exactly the ACK
    /// frame. Anything else, including not becoming ready, is `Ok(false)`.
    pub fn read_ack(&mut self, timeout: Duration) -> Result<bool> {
        if !self.wait_ready(timeout)? {
            trace!("ack: chip not ready within {:?}", timeout);
            return Ok(false);
        }
        let mut buf = [0u8; ACK_FRAME.len()];
        self.transaction(|bus| {
            bus.exchange(SPI_DATA_READ)?;
            bus.read_into(&mut buf)
        })?;
        trace!("ack <- {}", HexSlice(&buf));
        Ok(ack::is_ack(&buf))
    }

    /// Write a complete command frame.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        trace!("frame -> {}", HexSlice(frame));
        self.transaction(|bus| {
            bus.exchange(SPI_DATA_WRITE)?;
            bus.write_all(frame)
        })
    }

    /// Wait for a response frame and return its validated data bytes
    /// (echoed command byte first).
    ///
    /// The header is checked before the body is clocked out so a corrupt
    /// length never drives the read.
    pub fn read_response(&mut self, timeout: Duration) -> Result<Vec<u8>> {
        if !self.wait_ready(timeout)? {
            return Err(Error::Timeout);
        }
        let raw = self.transaction(|bus| {
            bus.exchange(SPI_DATA_READ)?;
            let mut raw = vec![0u8; FRAME_HEADER_LEN];
            bus.read_into(&mut raw)?;
            let len = Frame::parse_header(&raw)? as usize;
            // body (TFI + data), DCS, postamble
            let mut rest = vec![0u8; len + 2];
            bus.read_into(&mut rest)?;
            raw.extend_from_slice(&rest);
            Ok(raw)
        })?;
        trace!("frame <- {}", HexSlice(&raw));
        Frame::decode_response(&raw)
    }
}
