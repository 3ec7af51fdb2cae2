// libpn532/src/transport/traits.rs

use crate::Result;

/// Bus abstracts the SPI wiring away from the chip protocol.
///
/// Implementations carry no protocol logic: they drive the chip-select line
/// and clock single bytes full-duplex. Every multi-byte exchange is bracketed
/// by `select_low` / `select_high` and brackets never overlap.
pub trait Bus {
    /// Assert chip select (active low)
    fn select_low(&mut self) -> Result<()>;

    /// Release chip select
    fn select_high(&mut self) -> Result<()>;

    /// Send one byte and return the byte clocked in at the same time. Reads
    /// clock out a dummy byte.
    fn exchange(&mut self, byte: u8) -> Result<u8>;

    /// Send every byte of `data`, discarding what comes back.
    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        for &b in data {
            self.exchange(b)?;
        }
        Ok(())
    }

    /// Clock in `buf.len()` bytes by sending dummy zero bytes.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.exchange(0x00)?;
        }
        Ok(())
    }
}

impl<B: Bus + ?Sized> Bus for Box<B> {
    fn select_low(&mut self) -> Result<()> {
        (**self).select_low()
    }

    fn select_high(&mut self) -> Result<()> {
        (**self).select_high()
    }

    fn exchange(&mut self, byte: u8) -> Result<u8> {
        (**self).exchange(byte)
    }
}
