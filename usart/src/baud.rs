// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Baud rate divisor for the USART's fixed-point baud generator.
//!
//! The peripheral divides its kernel clock by `USARTDIV = f(CK) / baud`, stored in BRR as a
//! 12-bit mantissa and a 4-bit fraction (sixteenths):
//!
//! | f(CK) | Baud    | Mantissa | Fraction |
//! | ----- | ------- | -------- | -------- |
//! | 8 MHz | 9,600   | 52       | 1        |
//! | 8 MHz | 115,200 | 4        | 5        |
//! | 8 MHz | 460,800 | 1        | 1        |
//! | 8 MHz | 500,000 | 1        | 0        |
//!
//! The division truncates. Higher baud rates therefore carry proportionally more timing error.

/// Bit position of DIV_Mantissa in BRR.
pub const BRR_MANTISSA_POS: u32 = 4;
/// Bit position of DIV_Fraction in BRR.
pub const BRR_FRACTION_POS: u32 = 0;

const MANTISSA_MASK: u32 = 0x0FFF;
const FRACTION_MASK: u32 = 0x000F;

/// USARTDIV split into its whole and sixteenths parts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaudDivisor {
    /// Whole part, `USARTDIV / 16`.
    pub mantissa: u16,
    /// Sixteenths, `USARTDIV % 16`. Always below 16.
    pub fraction: u8,
}

impl BaudDivisor {
    /// Compute the divisor for `baud` from a kernel clock of `clock_hz`.
    ///
    /// # Panics
    ///
    /// Panics if `baud` is zero.
    pub fn new(clock_hz: u32, baud: u32) -> Self {
        let div = clock_hz / baud;
        Self {
            mantissa: ((div / 16) & MANTISSA_MASK) as u16,
            fraction: (div % 16) as u8,
        }
    }

    /// The integer divisor the hardware actually uses.
    #[inline]
    pub fn usartdiv(&self) -> u32 {
        u32::from(self.mantissa) * 16 + u32::from(self.fraction)
    }

    /// Value to load into BRR.
    #[inline]
    pub fn brr(&self) -> u32 {
        (u32::from(self.mantissa) & MANTISSA_MASK) << BRR_MANTISSA_POS
            | (u32::from(self.fraction) & FRACTION_MASK) << BRR_FRACTION_POS
    }

    /// Baud rate the peripheral produces with this divisor, in bits per second.
    ///
    /// Returns 0 for a zero divisor (baud above the kernel clock).
    pub fn actual_baud(&self, clock_hz: u32) -> u32 {
        match self.usartdiv() {
            0 => 0,
            div => clock_hz / div,
        }
    }
}
