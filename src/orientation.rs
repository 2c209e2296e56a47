//! The four logical-to-physical coordinate mappings of the panel.
//!
//! The physical panel is `PANEL_WIDTH` columns by `PANEL_HEIGHT` rows. Drawing calls take logical
//! coordinates, which are rotated or reflected into physical GRAM addresses here.

use crate::command::consts::*;
use crate::display::PixelCoord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Identity.
    Portrait = 0,
    /// Reflect y, then swap axes.
    Landscape = 1,
    /// Reflect both axes.
    PortraitFlipped = 2,
    /// Reflect x, then swap axes.
    LandscapeFlipped = 3,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Portrait
    }
}

impl From<u8> for Orientation {
    /// Any value is accepted; it is taken modulo 4.
    fn from(index: u8) -> Self {
        match index % 4 {
            0 => Orientation::Portrait,
            1 => Orientation::Landscape,
            2 => Orientation::PortraitFlipped,
            _ => Orientation::LandscapeFlipped,
        }
    }
}

impl Orientation {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Logical width and height.
    pub fn dimensions(self) -> PixelCoord {
        match self {
            Orientation::Portrait | Orientation::PortraitFlipped => {
                PixelCoord(PANEL_WIDTH as i16, PANEL_HEIGHT as i16)
            }
            Orientation::Landscape | Orientation::LandscapeFlipped => {
                PixelCoord(PANEL_HEIGHT as i16, PANEL_WIDTH as i16)
            }
        }
    }

    /// Map a logical coordinate to a physical one. Only meaningful for coordinates inside
    /// `dimensions()`.
    pub fn orient(self, p: PixelCoord) -> PixelCoord {
        let PixelCoord(max_x, max_y) = self.dimensions();
        let PixelCoord(x, y) = p;
        match self {
            Orientation::Portrait => PixelCoord(x, y),
            Orientation::Landscape => PixelCoord(max_y - y - 1, x),
            Orientation::PortraitFlipped => PixelCoord(max_x - x - 1, max_y - y - 1),
            Orientation::LandscapeFlipped => PixelCoord(y, max_x - x - 1),
        }
    }

    /// The entry mode under which GRAM writes advance through a window in logical row-major
    /// order, starting from the oriented logical origin corner.
    pub fn entry_mode(self) -> u16 {
        match self {
            // Horizontal increment, then vertical increment.
            Orientation::Portrait => 0x1030,
            // Vertical increment first, horizontal decrement.
            Orientation::Landscape => 0x1028,
            // Horizontal decrement, then vertical decrement.
            Orientation::PortraitFlipped => 0x1000,
            // Vertical decrement first, horizontal increment.
            Orientation::LandscapeFlipped => 0x1018,
        }
    }
}
