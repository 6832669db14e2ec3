// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART1 backend for the STM32F030.
//!
//! - USART1_TX = PA2 (pin 8), AF1
//! - USART1_RX = PA3 (pin 9), AF1
//!
//! The STM32F030x4/x6 only has USART1, so this is the only channel wired up. The backend owns
//! the RCC, GPIOA and USART1 register blocks; enable any other port clocks (e.g. GPIOB for an
//! LED) before handing RCC over, or take it back with [`Usart1::free`].

use stm32f0xx_hal::pac::{GPIOA, RCC, USART1};

use super::Peripheral;

pub struct Usart1 {
    rcc: RCC,
    gpioa: GPIOA,
    usart: USART1,
}

impl Usart1 {
    pub fn new(rcc: RCC, gpioa: GPIOA, usart: USART1) -> Self {
        Self { rcc, gpioa, usart }
    }

    pub fn free(self) -> (RCC, GPIOA, USART1) {
        (self.rcc, self.gpioa, self.usart)
    }
}

impl Peripheral for Usart1 {
    fn enable_port_clock(&mut self) {
        self.rcc.ahbenr.modify(|_, w| w.iopaen().set_bit());
    }

    fn configure_pins(&mut self) {
        self.gpioa
            .moder
            .modify(|_, w| w.moder2().alternate().moder3().alternate());
        self.gpioa.afrl.modify(|_, w| w.afrl2().af1().afrl3().af1());
    }

    fn enable_usart_clock(&mut self) {
        self.rcc.apb2enr.modify(|_, w| w.usart1en().set_bit());
    }

    fn write_brr(&mut self, brr: u32) {
        self.usart.brr.write(|w| unsafe { w.bits(brr) });
    }

    fn enable(&mut self) {
        self.usart
            .cr1
            .write(|w| w.te().set_bit().re().set_bit().ue().set_bit());
    }

    #[inline]
    fn is_tx_empty(&self) -> bool {
        self.usart.isr.read().txe().bit_is_set()
    }

    #[inline]
    fn is_tx_complete(&self) -> bool {
        self.usart.isr.read().tc().bit_is_set()
    }

    #[inline]
    fn is_rx_not_empty(&self) -> bool {
        self.usart.isr.read().rxne().bit_is_set()
    }

    #[inline]
    fn write_tdr(&mut self, byte: u8) {
        self.usart.tdr.write(|w| unsafe { w.bits(u32::from(byte)) });
    }

    #[inline]
    fn read_rdr(&mut self) -> u8 {
        self.usart.rdr.read().bits() as u8
    }
}
