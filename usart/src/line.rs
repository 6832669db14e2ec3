// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Echoed line input with backspace handling.
//!
//! Terminal protocol:
//!
//! - `CR` (13) ends the line. It is neither stored nor echoed.
//! - `DEL` (127) erases the last character and is echoed so the terminal rubs it out.
//! - Printable ASCII (0x20..=0x7E) is stored and echoed while there is room.
//! - Every other byte is dropped.
//!
//! No line ending is sent when the line completes; print one yourself if the cursor should move on.

use crate::transceiver::Transceiver;

/// Carriage return, sent by the `<Enter>` key.
pub const ENTER: u8 = 13;
/// Delete, sent by the backspace key of most terminals.
pub const BACKSPACE: u8 = 127;

pub trait ReadLine: Transceiver {
    /// Read one line into `buf`, echoing as the user types. Blocks until `<Enter>`.
    ///
    /// At most `buf.len() - 1` characters are kept; the slot after them is set to NUL. Once the
    /// buffer is full, further printable input is discarded without echo until a backspace
    /// or `<Enter>` arrives. An empty `buf` still consumes input up to `<Enter>` but stores
    /// nothing, not even the terminator.
    ///
    /// Returns the number of characters stored, excluding the terminator.
    fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let room = buf.len().saturating_sub(1);
        let mut len = 0;

        loop {
            match self.read_byte() {
                ENTER => break,
                b @ 0x20..=0x7E => {
                    if len < room {
                        buf[len] = b;
                        len += 1;
                        self.write_byte(b);
                    }
                }
                BACKSPACE if len > 0 => {
                    self.write_byte(BACKSPACE);
                    len -= 1;
                }
                _ => {}
            }
        }

        if let Some(end) = buf.get_mut(len) {
            *end = 0;
        }
        len
    }
}

impl<T: Transceiver + ?Sized> ReadLine for T {}
