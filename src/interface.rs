//! The transport seam between the driver and the panel: framed 16-bit command/data words, plus
//! the reset and backlight lines and the millisecond delay used by power sequencing.
//!
//! The bus has no acknowledgement channel, so none of these operations can report failure.

use hal::digital::v2::PinState;

pub trait DisplayInterface {
    /// Configure every control line as an output.
    fn init(&mut self);
    /// Send one command word, high byte first, with the D/C line low.
    fn send_command(&mut self, hi: u8, lo: u8);
    /// Send one data word, high byte first, with the D/C line high.
    fn send_data(&mut self, hi: u8, lo: u8);
    fn set_reset(&mut self, level: PinState);
    fn set_backlight(&mut self, on: bool);
    /// Busy-wait for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u16);
}

pub mod bitbang {
    //! Software-clocked serial bus. Every byte is shifted out most significant bit first on the
    //! data line, latched on the rising edge of the clock line, with a fixed delay between edges.
    //! Chip select frames each 16-bit word.

    use core::convert::Infallible;

    use hal::blocking::delay::{DelayMs, DelayUs};
    use hal::digital::v2::{OutputPin, PinState};

    use super::DisplayInterface;

    /// Delay between clock edges unless overridden with `BitBangInterface::bit_delay_us`.
    pub const DEFAULT_BIT_DELAY_US: u16 = 1;

    /// The control lines of the panel.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Line {
        /// Active-low controller reset.
        Reset,
        /// Data/command select: low for command words, high for data words.
        RegisterSelect,
        /// Active-low chip select.
        ChipSelect,
        /// Serial data in.
        Data,
        Clock,
        Backlight,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Direction {
        Input,
        Output,
    }

    /// The narrow GPIO capability the bus needs. Implementations map each `Line` onto a physical
    /// pin.
    pub trait Gpio {
        fn set_direction(&mut self, line: Line, direction: Direction);
        fn set_level(&mut self, line: Line, level: PinState);
    }

    pub struct BitBangInterface<G, D> {
        gpio: G,
        delay: D,
        bit_delay_us: u16,
    }

    impl<G, D> BitBangInterface<G, D>
    where
        G: Gpio,
        D: DelayMs<u16> + DelayUs<u16>,
    {
        /// Create a new bus over the control lines in `gpio`, using `delay` for both the per-bit
        /// clock delay and the millisecond settle delays.
        pub fn new(gpio: G, delay: D) -> Self {
            Self {
                gpio,
                delay,
                bit_delay_us: DEFAULT_BIT_DELAY_US,
            }
        }

        /// Override the delay between clock edges.
        pub fn bit_delay_us(self, bit_delay_us: u16) -> Self {
            Self {
                bit_delay_us,
                ..self
            }
        }

        /// Give back the GPIO and delay providers.
        pub fn release(self) -> (G, D) {
            (self.gpio, self.delay)
        }

        fn write_byte(&mut self, mut byte: u8) {
            self.delay.delay_us(self.bit_delay_us);
            for _ in 0..8 {
                let bit = PinState::from(byte & 0x80 != 0);
                self.gpio.set_level(Line::Data, bit);
                self.delay.delay_us(self.bit_delay_us);
                self.gpio.set_level(Line::Clock, PinState::High);
                self.delay.delay_us(self.bit_delay_us);
                self.gpio.set_level(Line::Clock, PinState::Low);
                byte <<= 1;
            }
            self.delay.delay_us(self.bit_delay_us);
        }

        fn write_word(&mut self, register_select: PinState, hi: u8, lo: u8) {
            self.gpio.set_level(Line::RegisterSelect, register_select);
            self.gpio.set_level(Line::ChipSelect, PinState::Low);
            self.write_byte(hi);
            self.write_byte(lo);
            self.gpio.set_level(Line::ChipSelect, PinState::High);
        }
    }

    impl<G, D> DisplayInterface for BitBangInterface<G, D>
    where
        G: Gpio,
        D: DelayMs<u16> + DelayUs<u16>,
    {
        fn init(&mut self) {
            for line in [
                Line::RegisterSelect,
                Line::ChipSelect,
                Line::Reset,
                Line::Backlight,
                Line::Clock,
                Line::Data,
            ]
            .iter()
            {
                self.gpio.set_direction(*line, Direction::Output);
            }
        }

        fn send_command(&mut self, hi: u8, lo: u8) {
            self.write_word(PinState::Low, hi, lo);
        }

        fn send_data(&mut self, hi: u8, lo: u8) {
            self.write_word(PinState::High, hi, lo);
        }

        fn set_reset(&mut self, level: PinState) {
            self.gpio.set_level(Line::Reset, level);
        }

        fn set_backlight(&mut self, on: bool) {
            self.gpio.set_level(Line::Backlight, PinState::from(on));
        }

        fn delay_ms(&mut self, ms: u16) {
            self.delay.delay_ms(ms);
        }
    }

    /// `Gpio` over a set of embedded-hal output pins.
    ///
    /// The pins are already outputs by type, so `set_direction` does nothing. Pin errors are
    /// dropped: the bus cannot report them anyway.
    pub struct HalPins<RST, RS, CS, SDI, CLK, LED> {
        rst: RST,
        rs: RS,
        cs: CS,
        sdi: SDI,
        clk: CLK,
        led: LED,
    }

    impl<RST, RS, CS, SDI, CLK, LED> HalPins<RST, RS, CS, SDI, CLK, LED>
    where
        RST: OutputPin,
        RS: OutputPin,
        CS: OutputPin,
        SDI: OutputPin,
        CLK: OutputPin,
        LED: OutputPin,
    {
        /// Bundle the panel pins. Use `NoPin` for `led` on modules without a switchable
        /// backlight.
        pub fn new(rst: RST, rs: RS, cs: CS, sdi: SDI, clk: CLK, led: LED) -> Self {
            Self {
                rst,
                rs,
                cs,
                sdi,
                clk,
                led,
            }
        }
    }

    impl<RST, RS, CS, SDI, CLK, LED> Gpio for HalPins<RST, RS, CS, SDI, CLK, LED>
    where
        RST: OutputPin,
        RS: OutputPin,
        CS: OutputPin,
        SDI: OutputPin,
        CLK: OutputPin,
        LED: OutputPin,
    {
        fn set_direction(&mut self, _line: Line, _direction: Direction) {}

        fn set_level(&mut self, line: Line, level: PinState) {
            match line {
                Line::Reset => {
                    let _ = self.rst.set_state(level);
                }
                Line::RegisterSelect => {
                    let _ = self.rs.set_state(level);
                }
                Line::ChipSelect => {
                    let _ = self.cs.set_state(level);
                }
                Line::Data => {
                    let _ = self.sdi.set_state(level);
                }
                Line::Clock => {
                    let _ = self.clk.set_state(level);
                }
                Line::Backlight => {
                    let _ = self.led.set_state(level);
                }
            }
        }
    }

    /// Placeholder for a line that is not wired up.
    pub struct NoPin;

    impl OutputPin for NoPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

}
