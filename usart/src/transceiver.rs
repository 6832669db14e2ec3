// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking byte transceiver.
//!
//! Everything above the byte level ([`Print`](crate::Print), [`ReadLine`](crate::ReadLine)) is
//! written against this trait only. [`Usart`](crate::Usart) satisfies it by busy-waiting on the
//! status flags; an interrupt-driven channel could satisfy it just as well.

pub trait Transceiver {
    /// Send one byte, returning once it has physically left the wire.
    fn write_byte(&mut self, byte: u8);

    /// Wait for the next received byte. Blocks forever if none arrives.
    fn read_byte(&mut self) -> u8;

    /// Take a received byte if one is pending, without waiting.
    fn try_read_byte(&mut self) -> Option<u8>;

    /// Like [`try_read_byte`](Self::try_read_byte), but reports "nothing pending" as `0`.
    ///
    /// A received NUL byte is indistinguishable from no data.
    #[inline]
    fn poll_byte(&mut self) -> u8 {
        self.try_read_byte().unwrap_or(0)
    }
}

impl<T: Transceiver + ?Sized> Transceiver for &mut T {
    #[inline]
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    #[inline]
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    #[inline]
    fn try_read_byte(&mut self) -> Option<u8> {
        (**self).try_read_byte()
    }

    #[inline]
    fn poll_byte(&mut self) -> u8 {
        (**self).poll_byte()
    }
}
