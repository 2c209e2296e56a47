//! Glyph rendering, and incremental redraw of a `Screen` character grid.

use itertools::iproduct;

use crate::color::Rgb565;
use crate::display::{Display, PixelCoord};
use crate::font::{Font, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH};
use crate::interface::DisplayInterface;
use crate::screen::Screen;

impl<DI, F> Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    /// Draw glyph index `glyph` of the current font with its top-left corner at `at`. Set bits
    /// are drawn in `color`, clear bits in the background color, as one window of pixels.
    ///
    /// Returns the glyph width, or 0 if no font is set. A glyph that would not fit entirely on
    /// the panel, or an index the font has no glyph for, is not drawn.
    pub fn draw_char(&mut self, at: PixelCoord, glyph: u8, color: Rgb565) -> u8 {
        let font = match self.font.as_ref() {
            Some(font) => font,
            None => return 0,
        };
        let width = font.width();
        let (w, h) = (width as usize, font.height() as usize);
        if w == 0 || w > MAX_GLYPH_WIDTH || h == 0 || h > MAX_GLYPH_HEIGHT {
            return width;
        }
        if glyph >= font.count() {
            return width;
        }

        // Skip the record's leading byte.
        let base = font.index_of(glyph) + 1;
        let mut columns = [0u8; MAX_GLYPH_WIDTH];
        for (i, column) in columns.iter_mut().take(w).enumerate() {
            *column = font.byte_at(base + i);
        }

        let to = PixelCoord(
            at.0.saturating_add(w as i16 - 1),
            at.1.saturating_add(h as i16 - 1),
        );
        if !self.in_bounds(at) || !self.in_bounds(to) {
            return width;
        }

        let mut block = [self.background; MAX_GLYPH_WIDTH * MAX_GLYPH_HEIGHT];
        for (pixel, (row, col)) in block.iter_mut().zip(iproduct!(0..h, 0..w)) {
            if (columns[col] >> row) & 1 != 0 {
                *pixel = color;
            }
        }

        self.set_window(at, to);
        for &pixel in &block[..w * h] {
            self.write_pixel(pixel);
        }
        width
    }

    /// Lay `text` out on `screen` one cell per byte, starting at the cell containing pixel `at`.
    /// Nothing is drawn; cells whose glyph changed become dirty. Text running off the right edge
    /// is dropped rather than wrapped.
    pub fn draw_text<const W: usize, const H: usize>(
        &self,
        screen: &mut Screen<W, H>,
        at: PixelCoord,
        text: &str,
    ) {
        let font = match self.font.as_ref() {
            Some(font) => font,
            None => return,
        };
        let (w, h) = (font.width() as i32, font.height() as i32);
        let y = at.1 as i32;
        if w == 0 || h == 0 || y < 0 {
            return;
        }

        let mut pen = at.0 as i32;
        for byte in text.bytes() {
            if pen >= 0 {
                let cell = ((pen / w) as usize, (y / h) as usize);
                screen.set(cell.0, cell.1, byte.wrapping_sub(font.offset()));
            }
            pen += w;
        }
    }

    /// Redraw every dirty cell of `screen` in `color`, acknowledging each one. The cursor cell,
    /// if the cursor is enabled, is drawn with foreground and background swapped.
    pub fn render<const W: usize, const H: usize>(
        &mut self,
        screen: &mut Screen<W, H>,
        color: Rgb565,
    ) {
        let (w, h) = match self.font.as_ref() {
            Some(font) => (font.width() as usize, font.height() as usize),
            None => return,
        };
        let limit = i16::MAX as usize;
        let cursor = screen.cursor();

        let mut dirties = screen.dirties();
        while let Some((cx, cy)) = dirties.next_dirty(screen) {
            let glyph = screen.get(cx, cy);
            let at = PixelCoord((cx * w).min(limit) as i16, (cy * h).min(limit) as i16);
            if cursor == Some((cx, cy)) {
                let background = self.background;
                self.background = color;
                self.draw_char(at, glyph, background);
                self.background = background;
            } else {
                self.draw_char(at, glyph, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::PixelCoord as Px;
    use super::*;
    use crate::color::{self, BLACK, WHITE};
    use crate::font::testing::DIGITS_3X5;
    use crate::font::RawFont;
    use crate::interface::test_spy::{Sent, TestSpyInterface};
    use std::vec::Vec;

    const B: u16 = BLACK.0;
    const Q: u16 = WHITE.0;

    fn display(di: &TestSpyInterface) -> Display<TestSpyInterface> {
        Display::with_font(di.split(), RawFont::new(DIGITS_3X5))
    }

    #[test]
    fn glyph_is_one_row_major_block() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        assert_eq!(disp.draw_char(Px(10, 20), 2, WHITE), 3);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let window = sends!(
            0x36, [12], 0x37, [10],
            0x38, [24], 0x39, [20],
            0x20, [10], 0x21, [20],
            0x22
        );
        assert_eq!(&di.sent()[..window.len()], &window[..]);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(di.pixel_words(), vec![
            Q, Q, Q,
            B, B, Q,
            Q, Q, Q,
            Q, B, B,
            Q, Q, Q,
        ]);
        assert_eq!(di.pixels()[3], (10, 21, B));
    }

    #[test]
    fn glyph_uses_background_color() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        disp.set_background_color(color::NAVY);
        disp.draw_char(Px(0, 0), 1, WHITE);
        let words = di.pixel_words();
        assert_eq!(words.len(), 15);
        for (i, &word) in words.iter().enumerate() {
            let expected = if i % 3 == 1 { Q } else { color::NAVY.0 };
            assert_eq!(word, expected, "pixel {}", i);
        }
    }

    #[test]
    fn no_font_draws_nothing() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        assert_eq!(disp.draw_char(Px(0, 0), 1, WHITE), 0);

        let mut screen = Screen::<4, 4>::new();
        disp.draw_text(&mut screen, Px(0, 0), "12");
        assert_eq!(screen.peek(0, 0), 0);

        screen.set(1, 1, 2);
        disp.render(&mut screen, WHITE);
        assert!(di.sent().is_empty());
        assert!(screen.is_dirty(1, 1));
    }

    #[test]
    fn glyph_partly_off_panel_is_skipped() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        assert_eq!(disp.draw_char(Px(174, 0), 1, WHITE), 3);
        assert_eq!(disp.draw_char(Px(0, 216), 1, WHITE), 3);
        assert_eq!(disp.draw_char(Px(-1, 0), 1, WHITE), 3);
        assert!(di.sent().is_empty());
        // Flush against the corner still fits.
        assert_eq!(disp.draw_char(Px(173, 215), 1, WHITE), 3);
        assert_eq!(di.pixel_words().len(), 15);
    }

    #[test]
    fn glyph_past_the_table_is_skipped() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        assert_eq!(disp.draw_char(Px(0, 0), 3, WHITE), 3);
        // A space laid out with a digits-only font.
        assert_eq!(disp.draw_char(Px(0, 0), b' '.wrapping_sub(b'0'), WHITE), 3);
        assert!(di.sent().is_empty());
    }

    #[test]
    fn glyph_in_landscape() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        disp.set_orientation(1);
        disp.draw_char(Px(0, 0), 1, WHITE);
        let fb = di.framebuffer();
        assert_eq!(fb.len(), 15);
        for (lx, ly) in iproduct!(0..3u16, 0..5u16) {
            let expected = if lx == 1 { Q } else { B };
            assert_eq!(fb[&(175 - ly, lx)], expected, "{:?}", (lx, ly));
        }
    }

    #[test]
    fn text_fills_cells() {
        let di = TestSpyInterface::new();
        let disp = display(&di);
        let mut screen = Screen::<4, 2>::new();
        disp.draw_text(&mut screen, Px(3, 5), "210");
        assert_eq!(screen.peek(1, 1), 2);
        assert_eq!(screen.peek(2, 1), 1);
        assert_eq!(screen.peek(3, 1), 0);
        assert!(screen.is_dirty(1, 1) && screen.is_dirty(2, 1));
        // Unchanged, so not dirty.
        assert!(!screen.is_dirty(3, 1));
        assert!(di.sent().is_empty());
    }

    #[test]
    fn text_does_not_wrap() {
        let di = TestSpyInterface::new();
        let disp = display(&di);
        let mut screen = Screen::<2, 2>::new();
        disp.draw_text(&mut screen, Px(3, 0), "122");
        assert_eq!(screen.peek(1, 0), 1);
        assert_eq!(screen.peek(0, 1), 0);
        assert_eq!(screen.peek(1, 1), 0);
    }

    #[test]
    fn text_skips_negative_pen() {
        let di = TestSpyInterface::new();
        let disp = display(&di);
        let mut screen = Screen::<4, 2>::new();
        disp.draw_text(&mut screen, Px(-3, 0), "12");
        assert_eq!(screen.peek(0, 0), 2);
        assert_eq!(screen.peek(1, 0), 0);

        let mut screen = Screen::<4, 2>::new();
        disp.draw_text(&mut screen, Px(0, -1), "12");
        assert!(!screen.is_dirty(0, 0) && !screen.is_dirty(1, 0));
    }

    #[test]
    fn render_draws_only_dirty_cells() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        let mut screen = Screen::<4, 2>::new();
        screen.set(1, 0, 2);
        screen.set(0, 1, 1);
        disp.render(&mut screen, WHITE);

        let fb = di.framebuffer();
        assert_eq!(fb.len(), 30);
        assert_eq!(fb[&(3, 0)], Q);
        assert_eq!(fb[&(4, 1)], B);
        assert_eq!(fb[&(0, 5)], B);
        assert_eq!(fb[&(1, 5)], Q);
        assert!(!fb.contains_key(&(0, 0)));
        assert!(!screen.is_dirty(1, 0) && !screen.is_dirty(0, 1));

        let mut spy = di.split();
        spy.clear();
        disp.render(&mut screen, WHITE);
        assert!(di.sent().is_empty());
    }

    #[test]
    fn render_follows_text() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        let mut screen = Screen::<4, 2>::new();
        disp.draw_text(&mut screen, Px(0, 5), "12");
        disp.render(&mut screen, color::GREEN);
        let fb = di.framebuffer();
        // '1' at cell (0, 1), '2' at cell (1, 1).
        assert_eq!(fb[&(1, 5)], color::GREEN.0);
        assert_eq!(fb[&(0, 5)], B);
        assert_eq!(fb[&(3, 6)], B);
        assert_eq!(fb[&(5, 6)], color::GREEN.0);
    }

    #[test]
    fn cursor_cell_is_inverted() {
        let di = TestSpyInterface::new();
        let mut disp = display(&di);
        let mut screen = Screen::<2, 1>::new();
        screen.move_cursor(0, 0);
        screen.enable_cursor();
        disp.render(&mut screen, WHITE);

        let fb = di.framebuffer();
        let lit: Vec<_> = iproduct!(0..3u16, 0..5u16)
            .filter(|p| fb[p] == Q)
            .collect();
        // The hollow middle of '0' is the only part in the foreground.
        assert_eq!(lit, vec![(1, 1), (1, 2), (1, 3)]);
        assert_eq!(disp.background_color(), BLACK);

        screen.disable_cursor();
        let mut spy = di.split();
        spy.clear();
        disp.render(&mut screen, WHITE);
        assert_eq!(di.pixel_words().iter().filter(|&&w| w == Q).count(), 12);
    }
}
