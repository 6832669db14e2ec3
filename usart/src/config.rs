// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART channel configuration.

use crate::baud::BaudDivisor;

/// Internal 8 MHz RC oscillator, the reset clock source of the STM32F030.
pub const HSI_HZ: u32 = 8_000_000;

/// Serial settings applied by [`Usart::init`](crate::Usart::init).
///
/// Frames are always 8N1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Baud rate in bits per second. Must be non-zero.
    pub baud_rate: u32,
    /// USART kernel clock in Hz.
    pub clock_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud_rate: 115_200,
            clock_hz: HSI_HZ,
        }
    }
}

impl Config {
    /// Configuration for `baud_rate` on the default HSI clock.
    pub fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            ..Default::default()
        }
    }

    /// Set the kernel clock frequency (e.g. after switching SYSCLK to the PLL).
    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Divisor to program into BRR.
    ///
    /// # Panics
    ///
    /// Panics if `baud_rate` is zero.
    #[inline]
    pub fn divisor(&self) -> BaudDivisor {
        BaudDivisor::new(self.clock_hz, self.baud_rate)
    }
}
