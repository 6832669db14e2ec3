// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Text output helpers for an attached debug terminal.
//!
//! [`Print`] is implemented for every [`Transceiver`] and covers strings, signed integers in any
//! base from 2 to 36, and fixed-width hex fields.
//!
//! Note: the terminal expects CRLF line endings. [`Print::println`] appends `\r\n`; nothing else
//! adds a line ending.

use crate::transceiver::Transceiver;

/// Scratch size for [`format_int`]: sign plus 32 binary digits.
pub const INT_BUF_LEN: usize = 33;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render `value` in `base` into the tail of `buf` and return the rendered slice.
///
/// Digits above 9 are uppercase. Negative values get a leading `-` in every base. A base
/// outside `2..=36` renders nothing.
pub fn format_int(value: i32, base: u32, buf: &mut [u8; INT_BUF_LEN]) -> &[u8] {
    if !(2..=36).contains(&base) {
        return &[];
    }

    let mut n = value.unsigned_abs();
    let mut i = buf.len();
    while i > 0 {
        i -= 1;
        buf[i] = DIGITS[(n % base) as usize];
        n /= base;
        if n == 0 {
            break;
        }
    }
    if value < 0 && i > 0 {
        i -= 1;
        buf[i] = b'-';
    }
    &buf[i..]
}

pub trait Print: Transceiver {
    fn print(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    fn println(&mut self, s: &str) {
        self.print(s);
        self.print("\r\n");
    }

    /// Write a NUL-terminated byte string, stopping at the terminator (or the end of the slice).
    fn print_cstr(&mut self, s: &[u8]) {
        for &b in s.iter().take_while(|&&b| b != 0) {
            self.write_byte(b);
        }
    }

    /// Write `value` in `base` (2 to 36). See [`format_int`].
    fn print_int(&mut self, value: i32, base: u32) {
        if base == 10 {
            let mut buf = itoa::Buffer::new();
            self.print(buf.format(value));
        } else {
            let mut buf = [0u8; INT_BUF_LEN];
            for &b in format_int(value, base, &mut buf) {
                self.write_byte(b);
            }
        }
    }

    /// Write exactly `places` uppercase hex digits of `number`, most significant first.
    ///
    /// If `number` needs more than `places` digits, every digit is printed as `.` instead.
    /// `places` is clamped to 1..=8.
    fn print_hex(&mut self, number: u32, places: u8) {
        let places = u32::from(places.clamp(1, 8));
        let out_of_range = number.checked_shr(places * 4).unwrap_or(0) != 0;

        for digit in (0..places).rev() {
            if out_of_range {
                self.write_byte(b'.');
            } else {
                self.write_byte(DIGITS[((number >> (digit * 4)) & 0xF) as usize]);
            }
        }
    }
}

impl<T: Transceiver + ?Sized> Print for T {}
