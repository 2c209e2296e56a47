//! Full example code for bringing up an ILI9225 panel and running a counter on it. This runs on an
//! STM32F303RE with a 2.2" 176x220 ILI9225 module wired to GPIO A: PA0 /RESET, PA1 RS, PA2 /CS,
//! PA3 SDI, PA4 CLK and PA5 LED.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate ili9225;
extern crate panic_abort;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use ili9225 as tft;
use ili9225::color;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

/// 5x8 digits, one byte per column, top row in the least significant bit.
#[cfg_attr(rustfmt, rustfmt_skip)]
static DIGITS_5X8: &[u8] = &[
    5, 8, b'0', 10,
    0, 0x3E, 0x51, 0x49, 0x45, 0x3E, // 0
    0, 0x00, 0x42, 0x7F, 0x40, 0x00, // 1
    0, 0x42, 0x61, 0x51, 0x49, 0x46, // 2
    0, 0x21, 0x41, 0x45, 0x4B, 0x31, // 3
    0, 0x18, 0x14, 0x12, 0x7F, 0x10, // 4
    0, 0x27, 0x45, 0x45, 0x45, 0x39, // 5
    0, 0x3C, 0x4A, 0x49, 0x49, 0x30, // 6
    0, 0x01, 0x71, 0x09, 0x05, 0x03, // 7
    0, 0x36, 0x49, 0x49, 0x49, 0x36, // 8
    0, 0x06, 0x49, 0x49, 0x29, 0x1E, // 9
];

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the display is connected. Every line is a push-pull output.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let rst = gpioa.pa0.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let rs = gpioa.pa1.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let cs = gpioa.pa2.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let sdi = gpioa.pa3.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let clk = gpioa.pa4.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);
    let led = gpioa.pa5.into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // The interface owns the pins and the delay, and clocks the serial bus itself.
    let iface = tft::BitBangInterface::new(tft::HalPins::new(rst, rs, cs, sdi, clk, led), delay);
    let mut disp = tft::Display::with_font(iface, tft::RawFont::new(DIGITS_5X8));

    disp.begin(
        tft::Config::new()
            .orientation(1)
            .background(color::NAVY),
    );

    // A frame around the text area.
    let (w, h) = (disp.max_x(), disp.max_y());
    disp.draw_rectangle(tft::PixelCoord(0, 0), tft::PixelCoord(w - 1, h - 1), color::YELLOW);
    disp.fill_circle(tft::PixelCoord(w / 2, h / 2), 30, color::DARK_CYAN);

    // 44x22 cells of 5x8 covers the landscape panel.
    let mut screen = tft::Screen::<44, 22>::new();
    let mut count: u32 = 0;
    let mut digits = [b'0'; 10];
    loop {
        let mut n = count;
        for d in digits.iter_mut().rev() {
            *d = b'0' + (n % 10) as u8;
            n /= 10;
        }
        let text = core::str::from_utf8(&digits).unwrap();
        disp.draw_text(&mut screen, tft::PixelCoord(8, 8), text);

        // Only the digits that changed are sent.
        disp.render(&mut screen, color::WHITE);
        count = count.wrapping_add(1);
    }
}
