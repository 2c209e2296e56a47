//! Fixed-width bitmap fonts.
//!
//! Glyphs are stored one byte per column, least significant bit at the top row, so glyphs are at
//! most 8 pixels tall.

/// Widest glyph the renderer will draw.
pub const MAX_GLYPH_WIDTH: usize = 16;
/// Tallest glyph the renderer will draw: one bit per row in a column byte.
pub const MAX_GLYPH_HEIGHT: usize = 8;

/// Read access to a glyph table, wherever it is stored.
pub trait Font {
    fn width(&self) -> u8;
    fn height(&self) -> u8;
    /// Code point of glyph index 0.
    fn offset(&self) -> u8;
    /// Number of glyphs. Indices at or past this are not drawn.
    fn count(&self) -> u8;
    fn byte_at(&self, offset: usize) -> u8;
    /// Byte offset of a glyph's record. The record starts with one byte the renderer skips,
    /// followed by `width()` column bytes.
    fn index_of(&self, glyph: u8) -> usize;
}

/// Size of the table header: width, height, code point offset, glyph count.
const HEADER_LEN: usize = 4;

/// A font backed by a byte table laid out as `[width, height, offset, count]` followed by
/// `count` glyph records of `1 + width` bytes each.
#[derive(Clone, Copy, Debug)]
pub struct RawFont<'a> {
    table: &'a [u8],
}

impl<'a> RawFont<'a> {
    /// Wrap a font table. Panics if the header describes glyphs taller than 8 pixels, wider than
    /// `MAX_GLYPH_WIDTH`, of zero width, or more glyphs than the table holds.
    pub fn new(table: &'a [u8]) -> Self {
        if false
            || table.len() < HEADER_LEN
            || table[0] == 0
            || table[0] as usize > MAX_GLYPH_WIDTH
            || table[1] as usize > MAX_GLYPH_HEIGHT
            || table.len() < HEADER_LEN + table[3] as usize * (1 + table[0] as usize)
        {
            panic!("Font table not supported.");
        }
        RawFont { table }
    }
}

impl<'a> Font for RawFont<'a> {
    fn width(&self) -> u8 {
        self.table[0]
    }

    fn height(&self) -> u8 {
        self.table[1]
    }

    fn offset(&self) -> u8 {
        self.table[2]
    }

    fn count(&self) -> u8 {
        self.table[3]
    }

    /// Bytes past the end of the table read as blank columns.
    fn byte_at(&self, offset: usize) -> u8 {
        self.table.get(offset).copied().unwrap_or(0)
    }

    fn index_of(&self, glyph: u8) -> usize {
        HEADER_LEN + glyph as usize * (1 + self.width() as usize)
    }
}

impl<'a, F> Font for &'a F
where
    F: Font + ?Sized,
{
    fn width(&self) -> u8 {
        (**self).width()
    }
    fn height(&self) -> u8 {
        (**self).height()
    }
    fn offset(&self) -> u8 {
        (**self).offset()
    }
    fn count(&self) -> u8 {
        (**self).count()
    }
    fn byte_at(&self, offset: usize) -> u8 {
        (**self).byte_at(offset)
    }
    fn index_of(&self, glyph: u8) -> usize {
        (**self).index_of(glyph)
    }
}
