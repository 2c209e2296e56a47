//! The main API to the display driver: bring-up, power, orientation, and the addressing window
//! that every drawing operation streams pixels through.

pub mod draw;
pub mod text;

use hal::digital::v2::PinState;

use crate::color::{self, Rgb565};
use crate::command::Command;
use crate::config::{Config, InitStep};
use crate::font::RawFont;
use crate::interface::DisplayInterface;
use crate::orientation::Orientation;

/// A pixel coordinate pair of `column` and `row`, in logical (oriented) coordinates unless noted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelCoord(pub i16, pub i16);

/// Physical GRAM bounds last programmed into the controller, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    pub fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }
}

/// A driver for an ILI9225 display.
///
/// The driver is the sole owner of the bus. Every operation blocks until its transfers and settle
/// delays have completed.
pub struct Display<DI, F = RawFont<'static>>
where
    DI: DisplayInterface,
{
    iface: DI,
    orientation: Orientation,
    background: Rgb565,
    font: Option<F>,
    window: Option<Window>,
}

impl<DI> Display<DI>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver connected to the interface `iface`. Nothing is sent until
    /// `begin`.
    pub fn new(iface: DI) -> Self {
        Display {
            iface,
            orientation: Orientation::default(),
            background: color::BLACK,
            font: None,
            window: None,
        }
    }
}

impl<DI, F> Display<DI, F>
where
    DI: DisplayInterface,
{
    /// Construct a new display driver with a font already selected.
    pub fn with_font(iface: DI, font: F) -> Self {
        Display {
            iface,
            orientation: Orientation::default(),
            background: color::BLACK,
            font: Some(font),
            window: None,
        }
    }

    /// Give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Bring the panel up: configure the control lines, pulse reset, replay the bring-up
    /// sequence, then apply the configured orientation and background and clear the panel.
    pub fn begin(&mut self, config: Config) {
        #[cfg(feature = "defmt")]
        defmt::debug!("ili9225: begin, {} init steps", config.init_sequence.len());

        self.iface.init();
        self.iface.set_backlight(true);

        self.iface.set_reset(PinState::High);
        self.iface.delay_ms(1);
        self.iface.set_reset(PinState::Low);
        self.iface.delay_ms(10);
        self.iface.set_reset(PinState::High);
        self.iface.delay_ms(50);

        for step in config.init_sequence {
            match *step {
                InitStep::Write(reg, value) => {
                    Command::WriteRegister(reg, value).send(&mut self.iface)
                }
                InitStep::DelayMs(ms) => self.iface.delay_ms(ms),
            }
        }

        self.set_backlight(true);
        self.set_orientation(config.orientation);
        self.set_background_color(config.background);
        self.clear();
    }

    /// Fill the whole panel with the background color.
    pub fn clear(&mut self) {
        let (w, h) = (self.max_x(), self.max_y());
        self.fill_rectangle(PixelCoord(0, 0), PixelCoord(w - 1, h - 1), self.background);
        self.iface.delay_ms(10);
    }

    /// Power the panel up or down. The sequence, including its settle delays, always runs to
    /// completion.
    pub fn set_display(&mut self, on: bool) {
        use crate::command::consts::*;

        #[cfg(feature = "defmt")]
        defmt::debug!("ili9225: display {}", on);

        Command::WriteRegister(POWER_SEQUENCE_PREAMBLE, 0).send(&mut self.iface);
        if on {
            Command::SetPowerControl(POWER_NORMAL).send(&mut self.iface);
            self.iface.delay_ms(50);
            Command::SetDisplayControl(DISPLAY_ON).send(&mut self.iface);
        } else {
            Command::SetDisplayControl(DISPLAY_OFF).send(&mut self.iface);
            self.iface.delay_ms(50);
            Command::SetPowerControl(POWER_STANDBY).send(&mut self.iface);
        }
        self.iface.delay_ms(200);
    }

    /// Control panel polarity inversion.
    pub fn invert(&mut self, on: bool) {
        Command::SetInversion(on).send(&mut self.iface);
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.iface.set_backlight(on);
    }

    /// Select one of the four orientations, taken modulo 4. Orientations 1 and 3 are landscape
    /// and swap `max_x` and `max_y`.
    pub fn set_orientation(&mut self, orientation: u8) {
        self.orientation = Orientation::from(orientation);

        #[cfg(feature = "defmt")]
        defmt::trace!("ili9225: orientation {}", self.orientation);

        Command::SetEntryMode(self.orientation.entry_mode()).send(&mut self.iface);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Logical width in the current orientation. Valid x coordinates are `0..max_x()`.
    pub fn max_x(&self) -> i16 {
        self.orientation.dimensions().0
    }

    /// Logical height in the current orientation. Valid y coordinates are `0..max_y()`.
    pub fn max_y(&self) -> i16 {
        self.orientation.dimensions().1
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.background = color;
    }

    pub fn background_color(&self) -> Rgb565 {
        self.background
    }

    pub fn set_font(&mut self, font: F) {
        self.font = Some(font);
    }

    pub fn font(&self) -> Option<&F> {
        self.font.as_ref()
    }

    /// The physical window last programmed, if any.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub(crate) fn in_bounds(&self, p: PixelCoord) -> bool {
        p.0 >= 0 && p.0 < self.max_x() && p.1 >= 0 && p.1 < self.max_y()
    }

    /// Program the addressing window spanning the logical corners `from` and `to` (inclusive,
    /// both on the panel) and enter GRAM write mode. Pixels streamed afterwards fill the window
    /// in logical row-major order starting at `from`.
    pub(crate) fn set_window(&mut self, from: PixelCoord, to: PixelCoord) {
        let a = self.orientation.orient(from);
        let b = self.orientation.orient(to);
        let window = Window {
            x0: a.0.min(b.0) as u16,
            y0: a.1.min(b.1) as u16,
            x1: a.0.max(b.0) as u16,
            y1: a.1.max(b.1) as u16,
        };
        Command::SetHorizontalWindow(window.x0, window.x1).send(&mut self.iface);
        Command::SetVerticalWindow(window.y0, window.y1).send(&mut self.iface);
        Command::SetRamAddress(a.0 as u16, a.1 as u16).send(&mut self.iface);
        Command::WriteGram.send(&mut self.iface);
        self.window = Some(window);
    }

    /// Stream one pixel into the current window.
    pub(crate) fn write_pixel(&mut self, color: Rgb565) {
        self.iface.send_data(color.hi(), color.lo());
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelCoord as Px, *};
    use crate::command::consts::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn new_sends_nothing() {
        let di = TestSpyInterface::new();
        let disp = Display::new(di.split());
        assert!(di.sent().is_empty());
        assert_eq!(disp.orientation(), Orientation::Portrait);
        assert_eq!(disp.window(), None);
        assert!(disp.font().is_none());
    }

    #[test]
    fn begin_sequence() {
        const STEPS: &[InitStep] = &[InitStep::Write(POWER_CTRL1, 0x0800), InitStep::DelayMs(5)];
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.begin(Config::new().init_sequence(STEPS).background(color::NAVY));

        let sent = di.sent();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let head = vec![
            Sent::Init,
            Sent::Backlight(true),
            Sent::Reset(PinState::High), Sent::DelayMs(1),
            Sent::Reset(PinState::Low), Sent::DelayMs(10),
            Sent::Reset(PinState::High), Sent::DelayMs(50),
            Sent::Cmd(0x10), Sent::Data(0x0800),
            Sent::DelayMs(5),
            Sent::Backlight(true),
        ];
        assert_eq!(&sent[..head.len()], &head[..]);

        #[cfg_attr(rustfmt, rustfmt_skip)]
        let clear = sends!(
            0x03, [0x1030], // entry mode for orientation 0
            0x36, [175], 0x37, [0],
            0x38, [219], 0x39, [0],
            0x20, [0], 0x21, [0],
            0x22
        );
        let clear_end = head.len() + clear.len();
        assert_eq!(&sent[head.len()..clear_end], &clear[..]);

        let pixels = &sent[clear_end..sent.len() - 1];
        assert_eq!(pixels.len(), 176 * 220);
        assert!(pixels.iter().all(|s| *s == Sent::Data(color::NAVY.0)));
        assert_eq!(sent.last(), Some(&Sent::DelayMs(10)));
        assert_eq!(disp.background_color(), color::NAVY);
    }

    #[test]
    fn begin_default_sequence_replays_every_step() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.begin(Config::new());
        let sent = di.sent();
        let writes = crate::config::DEFAULT_INIT_SEQUENCE
            .iter()
            .filter(|s| matches!(s, InitStep::Write(..)))
            .count();
        // Reset delays, then every bring-up delay.
        let delays = sent
            .iter()
            .filter(|s| matches!(s, Sent::DelayMs(_)))
            .count();
        assert_eq!(delays, 3 + 4 + 1);
        // Bring-up writes, entry mode, and the four window/address commands of the clear.
        let commands = sent.iter().filter(|s| matches!(s, Sent::Cmd(_))).count();
        assert_eq!(commands, writes + 1 + 7);
    }

    #[test]
    fn begin_with_orientation() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.begin(Config::new().init_sequence(&[]).orientation(5));
        assert_eq!(disp.orientation(), Orientation::Landscape);
        assert_eq!((disp.max_x(), disp.max_y()), (220, 176));
        assert_eq!(
            disp.window(),
            Some(Window {
                x0: 0,
                y0: 0,
                x1: 175,
                y1: 219
            })
        );
    }

    #[test]
    fn display_on() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.set_display(true);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&[
            Sent::Cmd(0xFF), Sent::Data(0),
            Sent::Cmd(0x10), Sent::Data(0x0000),
            Sent::DelayMs(50),
            Sent::Cmd(0x07), Sent::Data(0x1017),
            Sent::DelayMs(200),
        ]);
    }

    #[test]
    fn display_off() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.set_display(false);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&[
            Sent::Cmd(0xFF), Sent::Data(0),
            Sent::Cmd(0x07), Sent::Data(0x0000),
            Sent::DelayMs(50),
            Sent::Cmd(0x10), Sent::Data(0x0003),
            Sent::DelayMs(200),
        ]);
    }

    #[test]
    fn invert_and_backlight() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.invert(true);
        disp.invert(false);
        disp.set_backlight(false);
        di.check_multi(&[Sent::Cmd(0x21), Sent::Cmd(0x20), Sent::Backlight(false)]);
    }

    #[test]
    fn orientation_is_idempotent() {
        for o in 0..8u8 {
            let di = TestSpyInterface::new();
            let mut disp = Display::new(di.split());
            disp.set_orientation(o);
            let first = (disp.max_x(), disp.max_y());
            disp.set_orientation(o);
            assert_eq!((disp.max_x(), disp.max_y()), first);
            assert_eq!(disp.orientation().index(), o % 4);
            let expected = match o % 2 {
                0 => (176, 220),
                _ => (220, 176),
            };
            assert_eq!(first, expected);
            let mode = disp.orientation().entry_mode();
            di.check_multi(&sends!(0x03, [mode], 0x03, [mode]));
        }
    }

    #[test]
    fn window_issues_one_gram_write() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.set_window(Px(10, 20), Px(13, 24));
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&sends!(
            0x36, [13], 0x37, [10],
            0x38, [24], 0x39, [20],
            0x20, [10], 0x21, [20],
            0x22
        ));
        let window = disp.window().unwrap();
        assert_eq!((window.width(), window.height()), (4, 5));
    }

    #[test]
    fn window_starts_at_oriented_origin() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.set_orientation(2);
        let mut spy = di.split();
        spy.clear();
        disp.set_window(Px(0, 0), Px(9, 4));
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&sends!(
            0x36, [175], 0x37, [166],
            0x38, [219], 0x39, [215],
            0x20, [175], 0x21, [219],
            0x22
        ));
    }
}
