// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART channel handle.
//!
//! [`Usart::init`] brings the channel up and returns the handle every other operation goes
//! through. Byte I/O polls the status flags; the `nb` primitives ([`start_write`],
//! [`flush`], [`read`]) never wait, and the [`Transceiver`] methods spin on them with
//! [`nb::block!`].
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! [`start_write`]: Usart::start_write
//! [`flush`]: Usart::flush
//! [`read`]: Usart::read

use core::convert::Infallible;
use core::fmt;
use nb::block;

use crate::config::Config;
use crate::hw::Peripheral;
use crate::transceiver::Transceiver;

pub struct Usart<P: Peripheral> {
    periph: P,
}

impl<P: Peripheral> Usart<P> {
    /// Configure clocks, pins and baud rate, then enable the channel.
    ///
    /// The steps run in this order: GPIO port clock, pin alternate function, USART clock, BRR,
    /// and finally TE | RE | UE in a single write.
    ///
    /// # Panics
    ///
    /// Panics if `config.baud_rate` is zero.
    pub fn init(mut periph: P, config: Config) -> Self {
        let divisor = config.divisor();

        periph.enable_port_clock();
        periph.configure_pins();
        periph.enable_usart_clock();
        periph.write_brr(divisor.brr());
        periph.enable();

        #[cfg(feature = "defmt")]
        defmt::debug!("usart: {} baud, divisor {}", config.baud_rate, divisor);

        Self { periph }
    }

    /// Load the data register once TXE is set.
    pub fn start_write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if !self.periph.is_tx_empty() {
            return Err(nb::Error::WouldBlock);
        }
        self.periph.write_tdr(byte);
        Ok(())
    }

    /// Ready once the last byte has finished shifting out (TC).
    pub fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.periph.is_tx_complete() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Take the received byte once RXNE is set.
    pub fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.periph.is_rx_not_empty() {
            Ok(self.periph.read_rdr())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    pub fn free(self) -> P {
        self.periph
    }
}

impl<P: Peripheral> Transceiver for Usart<P> {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        let _ = block!(self.start_write(byte));
        let _ = block!(self.flush());
    }

    fn read_byte(&mut self) -> u8 {
        match block!(self.read()) {
            Ok(byte) => byte,
            Err(never) => match never {},
        }
    }

    fn try_read_byte(&mut self) -> Option<u8> {
        self.read().ok()
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<P: Peripheral> fmt::Write for Usart<P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}
