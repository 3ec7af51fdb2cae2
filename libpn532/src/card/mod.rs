// libpn532/src/card/mod.rs

//! MIFARE Classic card session: detection, sector authentication and the
//! fixed-layout payload transfer built on top of them.

use derive_more::Display;
use log::{debug, warn};

use crate::config::SessionConfig;
use crate::device::{Initialized, Pn532};
use crate::types::{BlockData, Key, Payload, Uid};
use crate::{Error, Result};

mod info;
pub use info::CardInfo;

pub mod operations;

/// Where a [`Session`] is in the detect / authenticate / transfer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SessionState {
    Idle,
    Detected,
    Authenticated,
    Reading,
    Writing,
}

/// Card session state. Holds the UID of the last detected card; every
/// detection refreshes it and a failed detection clears it.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    uid: Option<Uid>,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Idle,
            uid: None,
            config,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// UID of the last successful detection.
    pub fn uid(&self) -> Option<&Uid> {
        self.uid.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn transition(&mut self, to: SessionState) {
        if self.state != to {
            debug!("session: {} -> {}", self.state, to);
            self.state = to;
        }
    }

    fn reset(&mut self) {
        self.transition(SessionState::Idle);
    }

    fn require(&self, expected: SessionState) -> Result<()> {
        if self.state != expected {
            return Err(Error::InvalidState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    /// Run target detection and store the UID. Moves to `Detected`.
    pub fn ensure_card(&mut self, device: &mut Pn532<Initialized>) -> Result<&Uid> {
        match device.detect_target() {
            Ok(info) => {
                self.transition(SessionState::Detected);
                Ok(&*self.uid.insert(info.into_uid()))
            }
            Err(e) => {
                warn!("card detection failed: {}", e);
                self.uid = None;
                self.reset();
                Err(e)
            }
        }
    }

    /// Authenticate the sector owning `trailer_block` with key A. Requires
    /// a detected card; re-authentication from `Authenticated` is allowed.
    /// A rejection drops the session to `Idle`, so the card must be
    /// detected again before retrying.
    pub fn authenticate_sector(
        &mut self,
        device: &mut Pn532<Initialized>,
        trailer_block: u8,
        key: &Key,
    ) -> Result<()> {
        if !matches!(
            self.state,
            SessionState::Detected | SessionState::Authenticated
        ) {
            return Err(Error::InvalidState {
                expected: SessionState::Detected,
                actual: self.state,
            });
        }
        let uid = self.uid.as_ref().ok_or(Error::InvalidState {
            expected: SessionState::Detected,
            actual: self.state,
        })?;

        match operations::authenticate(device, trailer_block, key, uid) {
            Ok(()) => {
                self.transition(SessionState::Authenticated);
                Ok(())
            }
            Err(e) => {
                warn!("authentication of block {} failed: {}", trailer_block, e);
                self.reset();
                Err(e)
            }
        }
    }

    /// Read one block of the authenticated sector.
    pub fn read_block(&mut self, device: &mut Pn532<Initialized>, block: u8) -> Result<BlockData> {
        self.require(SessionState::Authenticated)?;
        operations::read_block(device, block).inspect_err(|_| self.reset())
    }

    /// Write one block of the authenticated sector. `data` must be exactly
    /// one block long; anything else is rejected before touching the bus.
    pub fn write_block(
        &mut self,
        device: &mut Pn532<Initialized>,
        block: u8,
        data: &[u8],
    ) -> Result<()> {
        self.require(SessionState::Authenticated)?;
        let data = BlockData::try_from(data)?;
        operations::write_block(device, block, &data).inspect_err(|_| self.reset())
    }

    /// Detect, authenticate and read every configured data block in order.
    pub fn read_payload(&mut self, device: &mut Pn532<Initialized>) -> Result<Payload> {
        let result = self.detect_and_authenticate(device).and_then(|()| {
            self.transition(SessionState::Reading);
            operations::read_blocks(device, &self.config.data_blocks)
        });
        self.reset();
        match &result {
            Ok(payload) => debug!("read payload of {} bytes", payload.len()),
            Err(e) => warn!("payload read failed: {}", e),
        }
        result
    }

    /// Detect, authenticate and write `bytes` across the configured data
    /// blocks, truncated or space padded to fit. Not transactional: a
    /// failure leaves the blocks written so far in place.
    pub fn write_payload(&mut self, device: &mut Pn532<Initialized>, bytes: &[u8]) -> Result<()> {
        let payload = Payload::padded(bytes, self.config.payload_len());
        let result = self.detect_and_authenticate(device).and_then(|()| {
            self.transition(SessionState::Writing);
            operations::write_blocks(device, &self.config.data_blocks, &payload)
        });
        self.reset();
        match &result {
            Ok(()) => debug!("wrote payload of {} bytes", payload.len()),
            Err(e) => warn!("payload write failed: {}", e),
        }
        result
    }

    /// Detect a card and fold up to its first five UID bytes big-endian.
    pub fn read_uid_numeric(&mut self, device: &mut Pn532<Initialized>) -> Result<u64> {
        let value = self.ensure_card(device)?.to_numeric();
        self.reset();
        Ok(value)
    }

    fn detect_and_authenticate(&mut self, device: &mut Pn532<Initialized>) -> Result<()> {
        self.config.validate()?;
        self.ensure_card(device)?;
        let trailer = self.config.trailer_block;
        let key = self.config.key;
        self.authenticate_sector(device, trailer, &key)
    }
}
