//! 16-bit RGB565 colors.

/// A packed color: 5 bits red, 6 bits green, 5 bits blue, red in the most significant bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

pub const BLACK: Rgb565 = Rgb565(0x0000);
pub const WHITE: Rgb565 = Rgb565(0xFFFF);
pub const BLUE: Rgb565 = Rgb565(0x001F);
pub const GREEN: Rgb565 = Rgb565(0x07E0);
pub const RED: Rgb565 = Rgb565(0xF800);
pub const NAVY: Rgb565 = Rgb565(0x000F);
pub const DARK_GREEN: Rgb565 = Rgb565(0x03E0);
pub const DARK_CYAN: Rgb565 = Rgb565(0x03EF);
pub const MAROON: Rgb565 = Rgb565(0x7800);
pub const PURPLE: Rgb565 = Rgb565(0x780F);
pub const OLIVE: Rgb565 = Rgb565(0x7BE0);
pub const LIGHT_GREY: Rgb565 = Rgb565(0xC618);
pub const DARK_GREY: Rgb565 = Rgb565(0x7BEF);
pub const CYAN: Rgb565 = Rgb565(0x07FF);
pub const MAGENTA: Rgb565 = Rgb565(0xF81F);
pub const YELLOW: Rgb565 = Rgb565(0xFFE0);
pub const ORANGE: Rgb565 = Rgb565(0xFD20);

impl Rgb565 {
    /// Pack 8-bit channels, keeping the most significant bits of each.
    pub const fn pack(red: u8, green: u8, blue: u8) -> Self {
        Rgb565((red as u16 >> 3) << 11 | (green as u16 >> 2) << 5 | (blue as u16 >> 3))
    }

    /// Expand back to 8-bit channels. The truncated low bits come back as zero.
    pub const fn unpack(self) -> (u8, u8, u8) {
        let red = ((self.0 & 0b1111_1000_0000_0000) >> 11 << 3) as u8;
        let green = ((self.0 & 0b0000_0111_1110_0000) >> 5 << 2) as u8;
        let blue = ((self.0 & 0b0000_0000_0001_1111) << 3) as u8;
        (red, green, blue)
    }

    pub(crate) fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub(crate) fn lo(self) -> u8 {
        self.0 as u8
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}
