//! Rasterization primitives. Everything here is built on two operations: plotting a single
//! clipped pixel, and streaming one color into a window.
//!
//! Coordinates are logical. Intermediate arithmetic is done in `i32` so that shapes reaching past
//! the panel edges clip rather than overflow.

use core::mem::swap;

use crate::color::Rgb565;
use crate::display::{Display, PixelCoord};
use crate::interface::DisplayInterface;

fn px(x: i32, y: i32) -> PixelCoord {
    PixelCoord(x as i16, y as i16)
}

/// Clip a value between some low and high limit.
fn clip(lo: i32, x: i32, hi: i32) -> i32 {
    match () {
        _ if x > hi => hi,
        _ if x < lo => lo,
        _ => x,
    }
}

impl<DI, F> Display<DI, F>
where
    DI: DisplayInterface,
{
    /// Plot one pixel. Pixels off the panel are silently dropped.
    pub fn draw_pixel(&mut self, p: PixelCoord, color: Rgb565) {
        if !self.in_bounds(p) {
            return;
        }
        self.set_window(p, p);
        self.write_pixel(color);
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb565) {
        if x < i16::MIN as i32 || x > i16::MAX as i32 || y < i16::MIN as i32 || y > i16::MAX as i32
        {
            return;
        }
        self.draw_pixel(px(x, y), color);
    }

    /// Draw a line with Bresenham's algorithm. The same pixels are drawn whichever end is given
    /// first.
    pub fn draw_line(&mut self, from: PixelCoord, to: PixelCoord, color: Rgb565) {
        self.line_i32(from.0 as i32, from.1 as i32, to.0 as i32, to.1 as i32, color);
    }

    fn line_i32(&mut self, mut x1: i32, mut y1: i32, mut x2: i32, mut y2: i32, color: Rgb565) {
        let (max_x, max_y) = (self.max_x() as i32 - 1, self.max_y() as i32 - 1);
        if x1.max(x2) < 0 || y1.max(y2) < 0 || x1.min(x2) > max_x || y1.min(y2) > max_y {
            return;
        }

        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        let ystep = if y1 < y2 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y1;

        for x in x1..=x2 {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Draw the outline of the rectangle with corners `a` and `b`, inclusive.
    pub fn draw_rectangle(&mut self, a: PixelCoord, b: PixelCoord, color: Rgb565) {
        self.draw_line(a, PixelCoord(a.0, b.1), color);
        self.draw_line(a, PixelCoord(b.0, a.1), color);
        self.draw_line(PixelCoord(a.0, b.1), b, color);
        self.draw_line(PixelCoord(b.0, a.1), b, color);
    }

    /// Fill the rectangle with corners `a` and `b`, inclusive, using a single window and one run
    /// of pixel data. The part of the rectangle off the panel is dropped.
    pub fn fill_rectangle(&mut self, a: PixelCoord, b: PixelCoord, color: Rgb565) {
        self.fill_rect_i32(a.0 as i32, a.1 as i32, b.0 as i32, b.1 as i32, color);
    }

    fn fill_rect_i32(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb565) {
        let (max_x, max_y) = (self.max_x() as i32 - 1, self.max_y() as i32 - 1);
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));
        if right < 0 || bottom < 0 || left > max_x || top > max_y {
            return;
        }
        let (left, right) = (clip(0, left, max_x), clip(0, right, max_x));
        let (top, bottom) = (clip(0, top, max_y), clip(0, bottom, max_y));

        self.set_window(px(left, top), px(right, bottom));
        for _ in 0..(right - left + 1) * (bottom - top + 1) {
            self.write_pixel(color);
        }
    }

    /// Draw a circle outline with the midpoint algorithm.
    pub fn draw_circle(&mut self, center: PixelCoord, radius: u16, color: Rgb565) {
        let (x0, y0) = (center.0 as i32, center.1 as i32);
        let r = radius as i32;
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.plot(x0, y0 + r, color);
        self.plot(x0, y0 - r, color);
        self.plot(x0 + r, y0, color);
        self.plot(x0 - r, y0, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            self.plot(x0 + y, y0 + x, color);
            self.plot(x0 - y, y0 + x, color);
            self.plot(x0 + y, y0 - x, color);
            self.plot(x0 - y, y0 - x, color);
        }
    }

    /// Fill a circle: four chords per midpoint step, then one rectangle over the core. The core
    /// is drawn twice for small radii.
    pub fn fill_circle(&mut self, center: PixelCoord, radius: u16, color: Rgb565) {
        let (x0, y0) = (center.0 as i32, center.1 as i32);
        let r = radius as i32;
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.chord(x0 + x, y0 + y, x0 - x, y0 + y, color); // bottom
            self.chord(x0 + x, y0 - y, x0 - x, y0 - y, color); // top
            self.chord(x0 + y, y0 - x, x0 + y, y0 + x, color); // right
            self.chord(x0 - y, y0 - x, x0 - y, y0 + x, color); // left
        }
        self.fill_rect_i32(x0 - x, y0 - y, x0 + x, y0 + y, color);
    }

    fn chord(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb565) {
        self.line_i32(x1, y1, x2, y2, color);
    }

    /// Draw a triangle outline: three lines between the vertices in the order given.
    pub fn draw_triangle(&mut self, a: PixelCoord, b: PixelCoord, c: PixelCoord, color: Rgb565) {
        self.draw_line(a, b, color);
        self.draw_line(b, c, color);
        self.draw_line(c, a, color);
    }

    /// Fill a triangle one horizontal scanline at a time.
    pub fn fill_triangle(&mut self, a: PixelCoord, b: PixelCoord, c: PixelCoord, color: Rgb565) {
        let (mut x1, mut y1) = (a.0 as i32, a.1 as i32);
        let (mut x2, mut y2) = (b.0 as i32, b.1 as i32);
        let (mut x3, mut y3) = (c.0 as i32, c.1 as i32);

        // Sort vertices by y so that y1 <= y2 <= y3.
        if y1 > y2 {
            swap(&mut y1, &mut y2);
            swap(&mut x1, &mut x2);
        }
        if y2 > y3 {
            swap(&mut y3, &mut y2);
            swap(&mut x3, &mut x2);
        }
        if y1 > y2 {
            swap(&mut y1, &mut y2);
            swap(&mut x1, &mut x2);
        }

        // All on one scanline.
        if y1 == y3 {
            let left = x1.min(x2).min(x3);
            let right = x1.max(x2).max(x3);
            self.line_i32(left, y1, right, y1, color);
            return;
        }

        // Edge accumulators reach dx * dy, beyond the i32 range.
        let (dx11, dy11) = ((x2 - x1) as i64, (y2 - y1) as i64);
        let (dx12, dy12) = ((x3 - x1) as i64, (y3 - y1) as i64);
        let (dx22, dy22) = ((x3 - x2) as i64, (y3 - y2) as i64);
        let mut sa: i64 = 0;
        let mut sb: i64 = 0;

        // Upper part, edges 1-2 and 1-3. A flat-bottomed triangle includes scanline y2 here and
        // skips the lower part; otherwise y2 belongs to the lower part, which also keeps a
        // flat-topped triangle from dividing by dy11 = 0.
        let last = if y2 == y3 { y2 } else { y2 - 1 };
        let mut y = y1;
        while y <= last {
            let a = x1 + (sa / dy11) as i32;
            let b = x1 + (sb / dy12) as i32;
            sa += dx11;
            sb += dx12;
            self.span(a, b, y, color);
            y += 1;
        }

        // Lower part, edges 2-3 and 1-3.
        sa = dx22 * (y - y2) as i64;
        sb = dx12 * (y - y1) as i64;
        while y <= y3 {
            let a = x2 + (sa / dy22) as i32;
            let b = x1 + (sb / dy12) as i32;
            sa += dx22;
            sb += dx12;
            self.span(a, b, y, color);
            y += 1;
        }
    }

    fn span(&mut self, mut a: i32, mut b: i32, y: i32, color: Rgb565) {
        if a > b {
            swap(&mut a, &mut b);
        }
        self.line_i32(a, y, b, y, color);
    }
}
