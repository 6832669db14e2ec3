// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register access surface for one USART channel.
//!
//! [`Peripheral`] exposes each hardware action the driver performs as its own method, so the
//! driver stays independent of the register layout and can be run against a simulated
//! peripheral on the host.
//!
//! ## Backends
//!
//! - [`stm32f030`] – USART1 on PA2 (TX) / PA3 (RX), AF1 (feature `stm32f030`)

#[cfg(feature = "stm32f030")]
pub mod stm32f030;

/// One USART channel together with the clocks and pins it needs.
pub trait Peripheral {
    /// Enable the bus clock of the GPIO port carrying the TX/RX pins.
    fn enable_port_clock(&mut self);

    /// Put the TX/RX pins in alternate function mode and route them to the USART.
    fn configure_pins(&mut self);

    /// Enable the bus clock of the USART itself.
    fn enable_usart_clock(&mut self);

    /// Load the baud rate register.
    fn write_brr(&mut self, brr: u32);

    /// Enable transmitter, receiver and the USART in one write.
    fn enable(&mut self);

    /// TXE: the transmit data register can take a new byte.
    fn is_tx_empty(&self) -> bool;

    /// TC: the last byte has left the shift register.
    fn is_tx_complete(&self) -> bool;

    /// RXNE: a received byte is waiting in the receive data register.
    fn is_rx_not_empty(&self) -> bool;

    fn write_tdr(&mut self, byte: u8);

    /// Read the receive data register. Clears RXNE.
    fn read_rdr(&mut self) -> u8;
}
