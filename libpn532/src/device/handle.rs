// libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::debug;

use crate::card::CardInfo;
use crate::config::TimingConfig;
use crate::protocol::{Command, Response, codec};
use crate::transport::{Bus, ChipLink, Clock};
use crate::types::FirmwareVersion;
use crate::utils::{HexSlice, ms};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// PN532 handle that enforces initialization (SAMConfiguration) at compile
/// time. Owns the bus exclusively; every operation takes `&mut self`.
pub struct Pn532<State = Uninitialized> {
    link: ChipLink,
    timing: TimingConfig,
    _state: PhantomData<State>,
}

impl<State> Pn532<State> {
    /// Run the three-phase exchange for `cmd`: write the command frame,
    /// wait for the ACK, then wait for and decode the response.
    fn transceive(&mut self, cmd: &Command) -> Result<Response> {
        let (ack_timeout, response_timeout) = self.timeouts(cmd);
        debug!(
            "command {:#04x}: {}",
            cmd.command_code(),
            HexSlice(&cmd.encode())
        );

        let frame = codec::encode_command_frame(cmd)?;
        self.link.write_frame(&frame)?;

        if !self.link.read_ack(ack_timeout)? {
            debug!("command {:#04x}: no ack", cmd.command_code());
            return Err(Error::NoAck);
        }

        let data = self.link.read_response(response_timeout)?;
        Response::decode(cmd.command_code(), &data)
    }

    fn timeouts(&self, cmd: &Command) -> (Duration, Duration) {
        let response = match cmd {
            Command::InListPassiveTarget { .. } => self.timing.detect_timeout_ms,
            _ => self.timing.response_timeout_ms,
        };
        (ms(self.timing.ack_timeout_ms), ms(response))
    }

    /// Query IC and firmware revision. Useful to probe wiring before
    /// initialization.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.transceive(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(v) => Ok(v),
            other => Err(Error::UnexpectedResponse {
                expected: Command::GetFirmwareVersion.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Timing in use.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}

impl Pn532<Uninitialized> {
    pub fn new(bus: Box<dyn Bus>, clock: Box<dyn Clock>, timing: TimingConfig) -> Self {
        Self {
            link: ChipLink::new(bus, clock, &timing),
            timing,
            _state: PhantomData,
        }
    }

    /// Configure the chip (SAMConfiguration, normal mode). Returns an
    /// initialized handle on success.
    pub fn initialize(self) -> Result<Pn532<Initialized>> {
        let mut device = Pn532::<Initialized> {
            link: self.link,
            timing: self.timing,
            _state: PhantomData,
        };
        device.configure()?;
        Ok(device)
    }
}

impl Pn532<Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        self.transceive(cmd)
    }

    /// Issue SAMConfiguration. Succeeds only if both the ACK and the echoed
    /// response arrive.
    pub fn configure(&mut self) -> Result<()> {
        match self.transceive(&Command::sam_normal())? {
            Response::SamConfiguration => Ok(()),
            other => Err(Error::UnexpectedResponse {
                expected: Command::sam_normal().response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Detect one 106 kbps type A target.
    pub fn detect_target(&mut self) -> Result<CardInfo> {
        let cmd = Command::detect_single_type_a();
        match self.transceive(&cmd)? {
            Response::InListPassiveTarget {
                target: Some(info), ..
            } => {
                debug!("target detected: uid={}", info.uid().to_hex());
                Ok(info)
            }
            Response::InListPassiveTarget { target: None, .. } => Err(Error::NoTarget),
            other => Err(Error::UnexpectedResponse {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Forward `data` to target 1 and return the status byte followed by
    /// whatever the card answered.
    pub fn exchange_data(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let cmd = Command::InDataExchange {
            target: 1,
            data: data.to_vec(),
        };
        match self.transceive(&cmd)? {
            Response::InDataExchange { status, data } => {
                let mut out = Vec::with_capacity(1 + data.len());
                out.push(status);
                out.extend_from_slice(&data);
                Ok(out)
            }
            other => Err(Error::UnexpectedResponse {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }
}
