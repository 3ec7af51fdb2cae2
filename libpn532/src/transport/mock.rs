// libpn532/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ};
use crate::transport::traits::Bus;
use crate::{Error, Result};

/// Chip side of the SPI wire protocol: decodes the instruction byte of each
/// select bracket, collects written frames and serves queued replies.
/// Shared by [`MockBus`] and the card simulator in `test_support`.
#[derive(Debug, Default)]
pub struct SlaveEndpoint {
    selected: bool,
    instruction: Option<u8>,
    rx: Vec<u8>,
    read_pos: usize,
    /// Replies waiting to be read (ACK frames, response frames)
    pub pending: VecDeque<Vec<u8>>,
    /// Number of upcoming status polls that report "not ready" even when a
    /// reply is pending
    pub not_ready_polls: usize,
    /// Completed select brackets
    pub transactions: usize,
    /// STATUS_READ polls answered
    pub status_polls: usize,
}

impl SlaveEndpoint {
    pub fn begin(&mut self) -> Result<()> {
        if self.selected {
            return Err(Error::Bus("chip select asserted twice".into()));
        }
        self.selected = true;
        self.instruction = None;
        self.rx.clear();
        self.read_pos = 0;
        Ok(())
    }

    pub fn exchange(&mut self, byte: u8) -> Result<u8> {
        if !self.selected {
            return Err(Error::Bus("exchange without chip select".into()));
        }
        let Some(instruction) = self.instruction else {
            self.instruction = Some(byte);
            return Ok(0x00);
        };
        match instruction {
            SPI_DATA_WRITE => {
                self.rx.push(byte);
                Ok(0x00)
            }
            SPI_STATUS_READ => {
                self.status_polls += 1;
                if self.pending.is_empty() {
                    return Ok(0x00);
                }
                if self.not_ready_polls > 0 {
                    self.not_ready_polls -= 1;
                    return Ok(0x00);
                }
                Ok(SPI_READY)
            }
            SPI_DATA_READ => {
                let out = self
                    .pending
                    .front()
                    .and_then(|reply| reply.get(self.read_pos))
                    .copied()
                    .unwrap_or(0x00);
                self.read_pos += 1;
                Ok(out)
            }
            other => Err(Error::Bus(format!("unknown instruction {:#04x}", other))),
        }
    }

    /// Close the bracket. Returns the bytes of a completed DATA_WRITE.
    pub fn end(&mut self) -> Result<Option<Vec<u8>>> {
        if !self.selected {
            return Err(Error::Bus("chip select released twice".into()));
        }
        self.selected = false;
        self.transactions += 1;
        match self.instruction.take() {
            Some(SPI_DATA_WRITE) => Ok(Some(std::mem::take(&mut self.rx))),
            Some(SPI_DATA_READ) if self.read_pos > 0 => {
                // A data read consumes the reply even when cut short
                self.pending.pop_front();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

#[derive(Debug, Default)]
pub struct MockBusState {
    pub endpoint: SlaveEndpoint,
    /// Frames written by the host, without the DATA_WRITE instruction byte
    pub written: Vec<Vec<u8>>,
    /// When set, every exchange fails with a bus error
    pub fail_exchange: bool,
}

/// Scripted bus for unit tests. Replies are served in order; clones share
/// state so a test can inspect traffic after the bus was boxed into a
/// device.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    inner: Rc<RefCell<MockBusState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes the chip will return on the next DATA_READ.
    pub fn push_reply(&self, reply: Vec<u8>) {
        self.inner.borrow_mut().endpoint.pending.push_back(reply);
    }

    /// Queue an ACK followed by a response frame carrying `data`.
    pub fn push_ack_and_response(&self, data: &[u8]) -> Result<()> {
        self.push_reply(crate::constants::ACK_FRAME.to_vec());
        self.push_reply(crate::protocol::Frame::encode_with(
            crate::constants::TFI_CHIP_TO_HOST,
            data,
        )?);
        Ok(())
    }

    pub fn set_not_ready_polls(&self, n: usize) {
        self.inner.borrow_mut().endpoint.not_ready_polls = n;
    }

    pub fn set_fail_exchange(&self, fail: bool) {
        self.inner.borrow_mut().fail_exchange = fail;
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().written.clone()
    }

    pub fn pending_replies(&self) -> usize {
        self.inner.borrow().endpoint.pending.len()
    }

    pub fn transactions(&self) -> usize {
        self.inner.borrow().endpoint.transactions
    }

    pub fn status_polls(&self) -> usize {
        self.inner.borrow().endpoint.status_polls
    }

    pub fn is_selected(&self) -> bool {
        self.inner.borrow().endpoint.is_selected()
    }
}

impl Bus for MockBus {
    fn select_low(&mut self) -> Result<()> {
        self.inner.borrow_mut().endpoint.begin()
    }

    fn select_high(&mut self) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        if let Some(frame) = state.endpoint.end()? {
            state.written.push(frame);
        }
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        let mut state = self.inner.borrow_mut();
        if state.fail_exchange {
            return Err(Error::Bus("simulated exchange failure".into()));
        }
        state.endpoint.exchange(byte)
    }
}
