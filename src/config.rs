//! Bring-up configuration for the ILI9225.
//!
//! The register values that power up the panel are module-specific, so they are carried as an
//! opaque ordered list of register writes and settle delays, replayed verbatim by
//! `Display::begin`.

use crate::color::{self, Rgb565};
use crate::command::consts::*;

/// One step of a bring-up sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Write a value to a register.
    Write(u16, u16),
    /// Wait for a number of milliseconds.
    DelayMs(u16),
}

use self::InitStep::*;

/// Bring-up sequence for the common 2.2" 176x220 ILI9225 modules: power rails, drive timing,
/// GRAM area, gamma curve, and finally display on.
#[cfg_attr(rustfmt, rustfmt_skip)]
pub const DEFAULT_INIT_SEQUENCE: &[InitStep] = &[
    // Start with every power control cleared.
    Write(POWER_CTRL1, 0x0000), // SAP, DSTB, STB
    Write(POWER_CTRL2, 0x0000), // APON, PON, AON, VCI1EN, VC
    Write(POWER_CTRL3, 0x0000), // BT, DC1, DC2, DC3
    Write(POWER_CTRL4, 0x0000), // GVDD
    Write(POWER_CTRL5, 0x0000), // VCOMH/VCOML voltage
    DelayMs(40),

    // Power-on sequence.
    Write(POWER_CTRL2, 0x0018),
    Write(POWER_CTRL3, 0x6121),
    Write(POWER_CTRL4, 0x006F),
    Write(POWER_CTRL5, 0x495F),
    Write(POWER_CTRL1, 0x0800),
    DelayMs(10),
    Write(POWER_CTRL2, 0x103B),
    DelayMs(50),

    Write(DRIVER_OUTPUT_CTRL, 0x011C), // display line count and direction
    Write(LCD_AC_DRIVING_CTRL, 0x0100), // 1-line inversion
    Write(ENTRY_MODE, 0x1030), // GRAM write direction, BGR
    Write(DISP_CTRL1, 0x0000), // display off
    Write(BLANK_PERIOD_CTRL1, 0x0808), // back and front porch
    Write(FRAME_CYCLE_CTRL, 0x1100), // clocks per line
    Write(INTERFACE_CTRL, 0x0000), // CPU interface
    Write(OSC_CTRL, 0x0D01),
    Write(VCI_RECYCLING, 0x0020),
    Write(RAM_ADDR_SET1, 0x0000),
    Write(RAM_ADDR_SET2, 0x0000),

    // GRAM area.
    Write(GATE_SCAN_CTRL, 0x0000),
    Write(VERTICAL_SCROLL_CTRL1, 0x00DB),
    Write(VERTICAL_SCROLL_CTRL2, 0x0000),
    Write(VERTICAL_SCROLL_CTRL3, 0x0000),
    Write(PARTIAL_DRIVING_POS1, 0x00DB),
    Write(PARTIAL_DRIVING_POS2, 0x0000),
    Write(HORIZONTAL_WINDOW_ADDR1, 0x00AF),
    Write(HORIZONTAL_WINDOW_ADDR2, 0x0000),
    Write(VERTICAL_WINDOW_ADDR1, 0x00DB),
    Write(VERTICAL_WINDOW_ADDR2, 0x0000),

    // Gamma curve.
    Write(GAMMA_CTRL1, 0x0000),
    Write(GAMMA_CTRL2, 0x0808),
    Write(GAMMA_CTRL3, 0x080A),
    Write(GAMMA_CTRL4, 0x000A),
    Write(GAMMA_CTRL5, 0x0A08),
    Write(GAMMA_CTRL6, 0x0808),
    Write(GAMMA_CTRL7, 0x0000),
    Write(GAMMA_CTRL8, 0x0A00),
    Write(GAMMA_CTRL9, 0x0710),
    Write(GAMMA_CTRL10, 0x0710),

    Write(DISP_CTRL1, 0x0012),
    DelayMs(50),
    Write(DISP_CTRL1, DISPLAY_ON),
];

/// A configuration for the display. Builder methods override the defaults: the standard
/// bring-up sequence, orientation 0, and a black background.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) init_sequence: &'static [InitStep],
    pub(crate) orientation: u8,
    pub(crate) background: Rgb565,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            init_sequence: DEFAULT_INIT_SEQUENCE,
            orientation: 0,
            background: color::BLACK,
        }
    }

    /// Replace the register bring-up sequence, for modules that need different power or gamma
    /// settings.
    pub fn init_sequence(self, init_sequence: &'static [InitStep]) -> Self {
        Self {
            init_sequence,
            ..self
        }
    }

    /// Orientation applied at the end of bring-up. Taken modulo 4.
    pub fn orientation(self, orientation: u8) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Background color the panel is cleared to at the end of bring-up, and used behind glyphs.
    pub fn background(self, background: Rgb565) -> Self {
        Self { background, ..self }
    }
}
