//! Run the full driver stack against the simulated chip and card.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libpn532 --example simulate

use libpn532::prelude::*;
use libpn532::test_support::SimulatedCard;
use libpn532::transport::MockClock;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let card = SimulatedCard::with_uid(&[0x04, 0x1A, 0x2B, 0x3C]);
    let mut reader = Reader::init(
        Box::new(card.clone()),
        Box::new(MockClock::new()),
        Pn532Config::default(),
    )?;

    println!("UID: {:#x}", reader.read_uid());

    let text = std::env::args().nth(1).unwrap_or_else(|| "HELLO".to_string());
    if !reader.write_text(&text) {
        anyhow::bail!("write failed");
    }
    println!("Stored: {:?}", reader.read_text());

    for block in [8u8, 9, 10] {
        println!("block {:2}: {}", block, bytes_to_hex_spaced(&card.block(block)));
    }
    Ok(())
}
