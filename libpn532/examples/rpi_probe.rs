//! Probe a PN532 on the Raspberry Pi SPI bus: firmware, UID and payload.
//!
//! Usage:
//!   cargo run -p libpn532 --example rpi_probe --features rppal --release
//!
//! Chip select defaults to BCM 8 (CE0); override with `PN532_CS=<bcm pin>`.

use anyhow::Context;
use libpn532::prelude::*;
use rppal::spi;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cs_pin = std::env::var("PN532_CS")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(8);

    let mut reader = Reader::open_rppal(spi::Bus::Spi0, cs_pin, Pn532Config::default())
        .context("failed to open PN532 on SPI0")?;

    let version = reader.device_mut().firmware_version()?;
    println!("Chip: {} (support {:#04x})", version, version.support);

    match reader.read_uid() {
        0 => println!("No card in field"),
        uid => {
            println!("UID: {:#x}", uid);
            println!("Payload: {:?}", reader.read_text().trim_end());
        }
    }

    reader.antenna_off();
    Ok(())
}
