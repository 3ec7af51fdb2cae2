// libpn532/src/reader.rs

//! Caller-facing surface: one initialized chip plus one card session,
//! with results collapsed to plain values for UI code.

use log::{debug, info, warn};

use crate::card::Session;
use crate::config::Pn532Config;
use crate::device::{Initialized, Pn532, Pn532Builder};
use crate::transport::{Bus, Clock};
use crate::Result;

pub struct Reader {
    device: Pn532<Initialized>,
    session: Session,
}

impl Reader {
    /// Build the device on `bus` and issue the configure command.
    pub fn init(bus: Box<dyn Bus>, clock: Box<dyn Clock>, config: Pn532Config) -> Result<Self> {
        config.session.validate()?;
        let device = Pn532Builder::new()
            .with_bus(bus)
            .with_clock(clock)
            .with_timing(config.timing)
            .build_uninitialized()?
            .initialize()?;
        info!("pn532 reader initialized");
        Ok(Self {
            device,
            session: Session::new(config.session),
        })
    }

    /// Open the Raspberry Pi SPI bus and initialize a reader on it.
    #[cfg(feature = "rppal")]
    pub fn open_rppal(bus: rppal::spi::Bus, cs_pin: u8, config: Pn532Config) -> Result<Self> {
        let spi = crate::transport::RppalBus::open(bus, cs_pin, &config.bus)?;
        Self::init(
            Box::new(spi),
            Box::new(crate::transport::StdClock::new()),
            config,
        )
    }

    /// Numeric UID of the card in the field, `0` when none answers.
    pub fn read_uid(&mut self) -> u64 {
        self.session
            .read_uid_numeric(&mut self.device)
            .unwrap_or_else(|e| {
                warn!("read_uid: {}", e);
                0
            })
    }

    /// Stored payload as text (lossy UTF-8), empty on failure.
    pub fn read_text(&mut self) -> String {
        match self.session.read_payload(&mut self.device) {
            Ok(payload) => payload.to_text_lossy(),
            Err(_) => String::new(),
        }
    }

    /// Store `text`, truncated or space padded to the payload size.
    pub fn write_text(&mut self, text: &str) -> bool {
        self.session
            .write_payload(&mut self.device, text.as_bytes())
            .is_ok()
    }

    /// Placeholder: the RF field is left as configured.
    pub fn antenna_off(&mut self) {
        debug!("antenna_off: no-op");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct access for operations the facade does not cover.
    pub fn device_mut(&mut self) -> &mut Pn532<Initialized> {
        &mut self.device
    }
}
