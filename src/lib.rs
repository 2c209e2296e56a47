//! Driver library for the ILI9225 176x220 RGB565 TFT controller, clocked over a software serial
//! bus, with a dirty-tracked character grid for incremental text rendering.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
mod testing {
    macro_rules! send {
        ($v:ident, [$($d:expr),*]) => {$($v.push(Sent::Data($d));)*};
        ($v:ident, $c:expr) => {$v.push(Sent::Cmd($c));};
    }
    macro_rules! sends {
        ($($e:tt),*) => {{
            let mut v = Vec::new();
            $(send!(v, $e);)*
            v
        }};
    }
}

pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod interface;
pub mod orientation;
pub mod screen;

// Re-exports for primary API.
pub use color::Rgb565;
pub use command::consts;
pub use config::{Config, InitStep};
pub use display::{Display, PixelCoord, Window};
pub use font::{Font, RawFont};
pub use interface::bitbang::{BitBangInterface, Direction, Gpio, HalPins, Line, NoPin};
pub use interface::DisplayInterface;
pub use orientation::Orientation;
pub use screen::{Dirties, Screen};
