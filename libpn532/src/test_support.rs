//! Test support helpers intended for use by unit and integration tests.
//!
//! [`SimulatedCard`] models a PN532 with one MIFARE Classic 1K card in its
//! field. It speaks the SPI wire protocol through the same
//! [`SlaveEndpoint`] as [`MockBus`](crate::transport::MockBus), so the whole
//! driver stack runs against it unchanged.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::config::TimingConfig;
use crate::constants::{
    ACK_FRAME, CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION, MIFARE_AUTH_KEY_A, MIFARE_BLOCK_LEN, MIFARE_KEY_LEN, MIFARE_READ,
    MIFARE_WRITE, TFI_CHIP_TO_HOST, TFI_HOST_TO_CHIP,
};
use crate::device::{Initialized, Pn532};
use crate::protocol::Frame;
use crate::transport::mock::SlaveEndpoint;
use crate::transport::{Bus, MockClock};
use crate::types::{Key, Uid};
use crate::utils::HexSlice;
use crate::Result;

/// Number of blocks on a MIFARE Classic 1K card
pub const CARD_BLOCKS: usize = 64;

/// Status the chip reports for a failed MIFARE operation
pub const STATUS_MIFARE_ERROR: u8 = 0x14;
/// Status the chip reports when no target answers
pub const STATUS_TIMEOUT: u8 = 0x01;

const DEFAULT_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

#[derive(Debug)]
pub struct SimulatedCardState {
    pub endpoint: SlaveEndpoint,
    /// Card is in the field
    pub present: bool,
    pub uid: Vec<u8>,
    /// Key A accepted for every sector
    pub key: Key,
    pub blocks: [[u8; MIFARE_BLOCK_LEN]; CARD_BLOCKS],
    /// Card was selected by the last InListPassiveTarget
    pub selected: bool,
    /// Sector unlocked by the last successful authentication
    pub authenticated_sector: Option<u8>,
    /// Writes to this block fail with a MIFARE error status
    pub fail_write_at: Option<u8>,
    /// MIFARE sub-command codes received, in order
    pub sub_commands: Vec<u8>,
}

impl SimulatedCardState {
    fn new(uid: &[u8]) -> Self {
        Self {
            endpoint: SlaveEndpoint::default(),
            present: true,
            uid: uid.to_vec(),
            key: Key::DEFAULT,
            blocks: [[0u8; MIFARE_BLOCK_LEN]; CARD_BLOCKS],
            selected: false,
            authenticated_sector: None,
            fail_write_at: None,
            sub_commands: Vec::new(),
        }
    }

    /// Handle one host frame: queue the ACK and the response.
    fn handle_frame(&mut self, frame: &[u8]) -> Result<()> {
        let data = match Frame::decode_with(TFI_HOST_TO_CHIP, frame) {
            Ok(data) => data,
            Err(e) => {
                // The chip ignores frames it cannot decode
                trace!("simulated chip dropped frame {}: {}", HexSlice(frame), e);
                return Ok(());
            }
        };
        let Some(response) = self.respond(&data) else {
            return Ok(());
        };
        self.endpoint.pending.push_back(ACK_FRAME.to_vec());
        self.endpoint
            .pending
            .push_back(Frame::encode_with(TFI_CHIP_TO_HOST, &response)?);
        Ok(())
    }

    fn respond(&mut self, data: &[u8]) -> Option<Vec<u8>> {
        let (&code, args) = data.split_first()?;
        let echo = code.wrapping_add(1);
        match code {
            CMD_SAM_CONFIGURATION => Some(vec![echo]),
            CMD_GET_FIRMWARE_VERSION => Some(vec![echo, 0x32, 0x01, 0x06, 0x07]),
            CMD_IN_LIST_PASSIVE_TARGET => Some(self.in_list_passive_target(echo)),
            CMD_IN_DATA_EXCHANGE => {
                let mut out = vec![echo];
                out.extend(self.in_data_exchange(args.get(1..).unwrap_or(&[])));
                Some(out)
            }
            _ => None,
        }
    }

    fn in_list_passive_target(&mut self, echo: u8) -> Vec<u8> {
        self.authenticated_sector = None;
        self.selected = self.present;
        if !self.present {
            return vec![echo, 0x00];
        }
        let mut out = vec![echo, 0x01, 0x01, 0x00, 0x04, 0x08, self.uid.len() as u8];
        out.extend_from_slice(&self.uid);
        out
    }

    fn in_data_exchange(&mut self, sub: &[u8]) -> Vec<u8> {
        let Some((&op, rest)) = sub.split_first() else {
            return vec![STATUS_MIFARE_ERROR];
        };
        self.sub_commands.push(op);
        if !self.present || !self.selected {
            return vec![STATUS_TIMEOUT];
        }
        let Some((&block, rest)) = rest.split_first() else {
            return vec![STATUS_MIFARE_ERROR];
        };
        if block as usize >= CARD_BLOCKS {
            return self.fail();
        }

        match op {
            MIFARE_AUTH_KEY_A => {
                let key_ok = rest.get(..MIFARE_KEY_LEN) == Some(&self.key.as_bytes()[..]);
                let uid_ok = rest.get(MIFARE_KEY_LEN..MIFARE_KEY_LEN + 4) == self.uid.get(..4);
                if key_ok && uid_ok {
                    self.authenticated_sector = Some(block / 4);
                    vec![0x00]
                } else {
                    self.fail()
                }
            }
            MIFARE_READ if self.authenticated_sector == Some(block / 4) => {
                let mut out = vec![0x00];
                out.extend_from_slice(&self.blocks[block as usize]);
                out
            }
            MIFARE_WRITE if self.authenticated_sector == Some(block / 4) => {
                if self.fail_write_at == Some(block) || rest.len() != MIFARE_BLOCK_LEN {
                    return self.fail();
                }
                self.blocks[block as usize].copy_from_slice(rest);
                vec![0x00]
            }
            _ => self.fail(),
        }
    }

    // Any MIFARE error halts the card's crypto state
    fn fail(&mut self) -> Vec<u8> {
        self.authenticated_sector = None;
        vec![STATUS_MIFARE_ERROR]
    }
}

/// Shared handle to a simulated chip and card. Clones share state, so a
/// test keeps one handle and boxes another into the device.
#[derive(Debug, Clone)]
pub struct SimulatedCard {
    inner: Rc<RefCell<SimulatedCardState>>,
}

impl Default for SimulatedCard {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedCard {
    /// Card with a 4-byte UID and blank blocks.
    pub fn new() -> Self {
        Self::with_uid(&DEFAULT_UID)
    }

    pub fn with_uid(uid: &[u8]) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SimulatedCardState::new(uid))),
        }
    }

    /// Build and initialize a device on this card with a virtual clock.
    pub fn initialized_device(&self) -> Result<Pn532<Initialized>> {
        self.device_with_timing(TimingConfig::default())
    }

    pub fn device_with_timing(&self, timing: TimingConfig) -> Result<Pn532<Initialized>> {
        Pn532::new(Box::new(self.clone()), Box::new(MockClock::new()), timing).initialize()
    }

    pub fn uid(&self) -> Result<Uid> {
        Uid::try_from(self.inner.borrow().uid.as_slice())
    }

    /// Take the card out of the field.
    pub fn remove(&self) {
        let mut state = self.inner.borrow_mut();
        state.present = false;
        state.selected = false;
        state.authenticated_sector = None;
    }

    pub fn insert(&self) {
        self.inner.borrow_mut().present = true;
    }

    pub fn set_key(&self, key: Key) {
        self.inner.borrow_mut().key = key;
    }

    pub fn fail_write_at(&self, block: u8) {
        self.inner.borrow_mut().fail_write_at = Some(block);
    }

    pub fn block(&self, block: u8) -> [u8; MIFARE_BLOCK_LEN] {
        self.inner.borrow().blocks[block as usize]
    }

    pub fn set_block(&self, block: u8, data: [u8; MIFARE_BLOCK_LEN]) {
        self.inner.borrow_mut().blocks[block as usize] = data;
    }

    pub fn sub_commands(&self) -> Vec<u8> {
        self.inner.borrow().sub_commands.clone()
    }

    /// Completed chip-select brackets so far
    pub fn transactions(&self) -> usize {
        self.inner.borrow().endpoint.transactions
    }

    pub fn is_selected(&self) -> bool {
        self.inner.borrow().endpoint.is_selected()
    }
}

impl Bus for SimulatedCard {
    fn select_low(&mut self) -> Result<()> {
        self.inner.borrow_mut().endpoint.begin()
    }

    fn select_high(&mut self) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        match state.endpoint.end()? {
            Some(frame) => state.handle_frame(&frame),
            None => Ok(()),
        }
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        self.inner.borrow_mut().endpoint.exchange(byte)
    }
}
