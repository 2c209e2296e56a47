//! The command set for the ILI9225.
//!
//! Every transfer on the bus is a 16-bit word. A register write is a command word carrying the
//! register index followed by a data word carrying its value. Image data is a run of data words
//! following the `GRAM_DATA_REG` command, one RGB565 word per pixel.

use crate::interface::DisplayInterface;

pub mod consts {
    pub const PANEL_WIDTH: u16 = 176;
    pub const PANEL_HEIGHT: u16 = 220;

    pub const DRIVER_OUTPUT_CTRL: u16 = 0x01;
    pub const LCD_AC_DRIVING_CTRL: u16 = 0x02;
    pub const ENTRY_MODE: u16 = 0x03;
    pub const DISP_CTRL1: u16 = 0x07;
    pub const BLANK_PERIOD_CTRL1: u16 = 0x08;
    pub const FRAME_CYCLE_CTRL: u16 = 0x0B;
    pub const INTERFACE_CTRL: u16 = 0x0C;
    pub const OSC_CTRL: u16 = 0x0F;
    pub const POWER_CTRL1: u16 = 0x10;
    pub const POWER_CTRL2: u16 = 0x11;
    pub const POWER_CTRL3: u16 = 0x12;
    pub const POWER_CTRL4: u16 = 0x13;
    pub const POWER_CTRL5: u16 = 0x14;
    pub const VCI_RECYCLING: u16 = 0x15;
    pub const RAM_ADDR_SET1: u16 = 0x20;
    pub const RAM_ADDR_SET2: u16 = 0x21;
    pub const GRAM_DATA_REG: u16 = 0x22;
    pub const GATE_SCAN_CTRL: u16 = 0x30;
    pub const VERTICAL_SCROLL_CTRL1: u16 = 0x31;
    pub const VERTICAL_SCROLL_CTRL2: u16 = 0x32;
    pub const VERTICAL_SCROLL_CTRL3: u16 = 0x33;
    pub const PARTIAL_DRIVING_POS1: u16 = 0x34;
    pub const PARTIAL_DRIVING_POS2: u16 = 0x35;
    pub const HORIZONTAL_WINDOW_ADDR1: u16 = 0x36;
    pub const HORIZONTAL_WINDOW_ADDR2: u16 = 0x37;
    pub const VERTICAL_WINDOW_ADDR1: u16 = 0x38;
    pub const VERTICAL_WINDOW_ADDR2: u16 = 0x39;
    pub const GAMMA_CTRL1: u16 = 0x50;
    pub const GAMMA_CTRL2: u16 = 0x51;
    pub const GAMMA_CTRL3: u16 = 0x52;
    pub const GAMMA_CTRL4: u16 = 0x53;
    pub const GAMMA_CTRL5: u16 = 0x54;
    pub const GAMMA_CTRL6: u16 = 0x55;
    pub const GAMMA_CTRL7: u16 = 0x56;
    pub const GAMMA_CTRL8: u16 = 0x57;
    pub const GAMMA_CTRL9: u16 = 0x58;
    pub const GAMMA_CTRL10: u16 = 0x59;

    /// Written with 0 at the start of both power sequences.
    pub const POWER_SEQUENCE_PREAMBLE: u16 = 0xFF;

    pub const INVERSION_OFF: u16 = 0x20;
    pub const INVERSION_ON: u16 = 0x21;

    /// `DISP_CTRL1` values.
    pub const DISPLAY_OFF: u16 = 0x0000;
    pub const DISPLAY_ON: u16 = 0x1017;
    /// `POWER_CTRL1` values.
    pub const POWER_NORMAL: u16 = 0x0000;
    pub const POWER_STANDBY: u16 = 0x0003;
}

use self::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Write an arbitrary 16-bit value to a register.
    WriteRegister(u16, u16),
    /// Set the GRAM address counter update direction. Bit 3 (AM) selects vertical-first update,
    /// bit 4 (I/D0) horizontal increment, bit 5 (I/D1) vertical increment. Bit 12 selects BGR
    /// order and is always kept set.
    SetEntryMode(u16),
    /// Set the horizontal window to columns `start..=end`.
    SetHorizontalWindow(u16, u16),
    /// Set the vertical window to rows `start..=end`.
    SetVerticalWindow(u16, u16),
    /// Point the GRAM address counter at a physical column and row.
    SetRamAddress(u16, u16),
    /// Enter GRAM write mode. Every following data word is one pixel, written at the address
    /// counter, which then advances through the window according to the entry mode.
    WriteGram,
    /// Invert panel polarity.
    SetInversion(bool),
    /// Set `DISP_CTRL1`.
    SetDisplayControl(u16),
    /// Set `POWER_CTRL1`.
    SetPowerControl(u16),
}

fn write_command<DI>(iface: &mut DI, word: u16)
where
    DI: DisplayInterface,
{
    iface.send_command((word >> 8) as u8, word as u8);
}

fn write_register<DI>(iface: &mut DI, reg: u16, value: u16)
where
    DI: DisplayInterface,
{
    write_command(iface, reg);
    iface.send_data((value >> 8) as u8, value as u8);
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI)
    where
        DI: DisplayInterface,
    {
        match self {
            Command::WriteRegister(reg, value) => write_register(iface, reg, value),
            Command::SetEntryMode(mode) => write_register(iface, ENTRY_MODE, mode),
            Command::SetHorizontalWindow(start, end) => {
                write_register(iface, HORIZONTAL_WINDOW_ADDR1, end);
                write_register(iface, HORIZONTAL_WINDOW_ADDR2, start);
            }
            Command::SetVerticalWindow(start, end) => {
                write_register(iface, VERTICAL_WINDOW_ADDR1, end);
                write_register(iface, VERTICAL_WINDOW_ADDR2, start);
            }
            Command::SetRamAddress(x, y) => {
                write_register(iface, RAM_ADDR_SET1, x);
                write_register(iface, RAM_ADDR_SET2, y);
            }
            Command::WriteGram => write_command(iface, GRAM_DATA_REG),
            Command::SetInversion(on) => write_command(
                iface,
                match on {
                    true => INVERSION_ON,
                    false => INVERSION_OFF,
                },
            ),
            Command::SetDisplayControl(value) => write_register(iface, DISP_CTRL1, value),
            Command::SetPowerControl(value) => write_register(iface, POWER_CTRL1, value),
        }
    }
}
