// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated USART for host tests.
//!
//! Status flags can be made to lag by a fixed number of polls so that tests observe the
//! busy-wait ordering. Every register access that matters for ordering lands in an event log.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::hw::Peripheral;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    PortClock,
    Pins,
    UsartClock,
    Brr(u32),
    Enable,
    TxEmpty(bool),
    TxComplete(bool),
    Tdr(u8),
}

pub struct MockPeripheral {
    events: RefCell<Vec<Event>>,
    sent: Vec<u8>,
    rx: VecDeque<u8>,

    tx_latency: u32,
    txe_wait: Cell<u32>,
    tc_wait: Cell<u32>,

    rx_latency: u32,
    rxne_wait: Cell<u32>,
    rx_polls: Cell<u32>,
}

impl MockPeripheral {
    /// Flags are ready on the first poll.
    pub fn new() -> Self {
        Self::with_latency(0)
    }

    /// TXE and TC each read clear `polls` times before setting, after every byte.
    pub fn with_latency(polls: u32) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            sent: Vec::new(),
            rx: VecDeque::new(),
            tx_latency: polls,
            txe_wait: Cell::new(polls),
            tc_wait: Cell::new(0),
            rx_latency: 0,
            rxne_wait: Cell::new(0),
            rx_polls: Cell::new(0),
        }
    }

    /// RXNE reads clear `polls` times before each pending byte shows up.
    pub fn set_rx_latency(&mut self, polls: u32) {
        self.rx_latency = polls;
        self.rxne_wait.set(polls);
    }

    /// Queue bytes as if typed on the terminal.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&mut self) {
        self.events.borrow_mut().clear();
    }

    /// Everything written to TDR so far.
    pub fn sent(&self) -> Vec<u8> {
        self.sent.clone()
    }

    pub fn pending_rx(&self) -> usize {
        self.rx.len()
    }

    pub fn rx_polls(&self) -> u32 {
        self.rx_polls.get()
    }

    fn log(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Count down a lagging flag, reporting set once it reaches zero.
    fn settle(wait: &Cell<u32>) -> bool {
        match wait.get() {
            0 => true,
            n => {
                wait.set(n - 1);
                false
            }
        }
    }
}

impl Peripheral for MockPeripheral {
    fn enable_port_clock(&mut self) {
        self.log(Event::PortClock);
    }

    fn configure_pins(&mut self) {
        self.log(Event::Pins);
    }

    fn enable_usart_clock(&mut self) {
        self.log(Event::UsartClock);
    }

    fn write_brr(&mut self, brr: u32) {
        self.log(Event::Brr(brr));
    }

    fn enable(&mut self) {
        self.log(Event::Enable);
    }

    fn is_tx_empty(&self) -> bool {
        let set = Self::settle(&self.txe_wait);
        self.log(Event::TxEmpty(set));
        set
    }

    fn is_tx_complete(&self) -> bool {
        let set = Self::settle(&self.tc_wait);
        self.log(Event::TxComplete(set));
        set
    }

    fn is_rx_not_empty(&self) -> bool {
        self.rx_polls.set(self.rx_polls.get() + 1);
        !self.rx.is_empty() && Self::settle(&self.rxne_wait)
    }

    fn write_tdr(&mut self, byte: u8) {
        self.log(Event::Tdr(byte));
        self.sent.push(byte);
        self.txe_wait.set(self.tx_latency);
        self.tc_wait.set(self.tx_latency);
    }

    fn read_rdr(&mut self) -> u8 {
        self.rxne_wait.set(self.rx_latency);
        self.rx.pop_front().unwrap_or(0)
    }
}
