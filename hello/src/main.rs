//! STM32F030K6T6 serial console demo.
//!
//! - LED on PB0 blinks while `Test!` scrolls on USART1 (PA2 TX / PA3 RX, 115200 8N1).
//! - Press any key to get a prompt; the typed line is echoed back with its length.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;

use f030_usart::{hw::stm32f030::Usart1, Config, Print, ReadLine, Transceiver, Usart};
use stm32f0xx_hal::pac;

const LINE_LEN: usize = 40;
const BLINK_CYCLES: u32 = 2_000_000;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();

    // LED (PB0)
    dp.RCC.ahbenr.modify(|_, w| w.iopben().set_bit());
    dp.GPIOB.moder.modify(|_, w| w.moder0().output());
    let gpiob = dp.GPIOB;

    // USART1 (DBG)
    let serial = Usart1::new(dp.RCC, dp.GPIOA, dp.USART1);
    let mut usart = Usart::init(serial, Config::new(115_200));

    usart.write_byte(b'H');
    usart.println("ello World!");

    let mut line = [0u8; LINE_LEN];
    loop {
        gpiob.odr.modify(|r, w| w.odr0().bit(!r.odr0().bit()));
        usart.println("Test!");

        if usart.poll_byte() != 0 {
            usart.print("\r\n> ");
            let n = usart.read_line(&mut line);
            usart.print("\r\n");
            usart.print_cstr(&line);
            usart.print(" [");
            usart.print_int(n as i32, 10);
            usart.print(" chars, 0x");
            usart.print_hex(n as u32, 2);
            usart.println("]");
        }

        cortex_m::asm::delay(BLINK_CYCLES);
    }
}
