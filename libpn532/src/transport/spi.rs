// libpn532/src/transport/spi.rs
#![cfg(feature = "rppal")]

//! Raspberry Pi SPI transport.
//!
//! The hardware chip-select of the SPI controller toggles per transfer, but
//! the PN532 needs select held across a whole frame, so a plain GPIO output
//! pin drives the select line instead.

use log::debug;
use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{self, SlaveSelect, Spi};

use crate::config::{BitOrder, BusConfig, SpiMode};
use crate::transport::traits::Bus;
use crate::Result;

pub struct RppalBus {
    spi: Spi,
    cs: OutputPin,
}

impl RppalBus {
    /// Open SPI bus `bus` and use BCM pin `cs_pin` as chip select.
    pub fn open(bus: spi::Bus, cs_pin: u8, config: &BusConfig) -> Result<Self> {
        let mode = match config.mode {
            SpiMode::Mode0 => spi::Mode::Mode0,
            SpiMode::Mode1 => spi::Mode::Mode1,
            SpiMode::Mode2 => spi::Mode::Mode2,
            SpiMode::Mode3 => spi::Mode::Mode3,
        };
        let spi = Spi::new(bus, SlaveSelect::Ss0, config.clock_hz, mode)?;
        spi.set_bit_order(match config.bit_order {
            BitOrder::MsbFirst => spi::BitOrder::MsbFirst,
            BitOrder::LsbFirst => spi::BitOrder::LsbFirst,
        })?;

        let mut cs = Gpio::new()?.get(cs_pin)?.into_output();
        cs.set_high();

        debug!(
            "spi opened: {:?} cs=BCM{} {} Hz {:?}",
            bus, cs_pin, config.clock_hz, config.mode
        );
        Ok(Self { spi, cs })
    }
}

impl Bus for RppalBus {
    fn select_low(&mut self) -> Result<()> {
        self.cs.set_low();
        Ok(())
    }

    fn select_high(&mut self) -> Result<()> {
        self.cs.set_high();
        Ok(())
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        let mut rx = [0u8; 1];
        self.spi.transfer(&mut rx, &[byte])?;
        Ok(rx[0])
    }
}
