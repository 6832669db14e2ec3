// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # f030-usart
//!
//! Minimal blocking serial console driver for a single USART channel on the STM32F030.
//!
//! The driver polls the status flags of the peripheral (no interrupts, no DMA) and builds a small
//! diagnostic console on top of two byte primitives: formatted numeric output and an echoed,
//! backspace-aware line editor.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Baud rate and peripheral clock settings |
//! | [`baud`] | Fixed-point baud divisor (mantissa + 4-bit fraction) |
//! | [`hw`] | Register access surface, plus the STM32F030 USART1 backend |
//! | [`usart`] | Channel handle: initialization and polling byte I/O |
//! | [`transceiver`] | Blocking byte transceiver capability |
//! | [`format`] | Strings, integers in any base, fixed-width hex |
//! | [`line`] | Interactive line input |
//!
//! ## Getting Started
//!
//! ```ignore
//! use f030_usart::{hw::stm32f030::Usart1, Config, Print, ReadLine, Usart};
//!
//! let mut usart = Usart::init(Usart1::new(dp.RCC, dp.GPIOA, dp.USART1), Config::new(115_200));
//! usart.println("Hello World!");
//!
//! let mut buf = [0u8; 32];
//! let n = usart.read_line(&mut buf);
//! usart.print_int(n as i32, 10);
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod baud;
pub mod config;
pub mod format;
pub mod hw;
pub mod line;
pub mod transceiver;
pub mod usart;

#[cfg(test)]
pub(crate) mod mock;

pub use baud::BaudDivisor;
pub use config::Config;
pub use format::Print;
pub use hw::Peripheral;
pub use line::ReadLine;
pub use transceiver::Transceiver;
pub use usart::Usart;
