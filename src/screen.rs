//! A character grid that remembers which cells changed since they were last drawn.
//!
//! Each cell holds a glyph index and a dirty flag. Writing a different value marks the cell
//! dirty; reading it through `get` acknowledges the change and clears the flag. A render pass
//! walks the dirty cells with a `Dirties` cursor and redraws only those.

/// A `W` x `H` grid of glyph indices with per-cell dirty flags and a cursor.
#[derive(Clone, Debug)]
pub struct Screen<const W: usize, const H: usize> {
    cells: [[u8; W]; H],
    dirty: [[bool; W]; H],
    cursor_enabled: bool,
    cursor: (usize, usize),
}

impl<const W: usize, const H: usize> Default for Screen<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Screen<W, H> {
    /// A grid of zeroes with nothing dirty and the cursor disabled at (0, 0).
    pub const fn new() -> Self {
        Screen {
            cells: [[0; W]; H],
            dirty: [[false; W]; H],
            cursor_enabled: false,
            cursor: (0, 0),
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Store `value` at `(x, y)`, marking the cell dirty only if the value changed. Cells outside
    /// the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= W || y >= H {
            return;
        }
        if self.cells[y][x] != value {
            self.cells[y][x] = value;
            self.dirty[y][x] = true;
        }
    }

    /// Read the value at `(x, y)` and clear its dirty flag. Cells outside the grid read as 0.
    pub fn get(&mut self, x: usize, y: usize) -> u8 {
        if x >= W || y >= H {
            return 0;
        }
        self.dirty[y][x] = false;
        self.cells[y][x]
    }

    /// Read the value at `(x, y)` without acknowledging it.
    pub fn peek(&self, x: usize, y: usize) -> u8 {
        if x >= W || y >= H {
            return 0;
        }
        self.cells[y][x]
    }

    pub fn is_dirty(&self, x: usize, y: usize) -> bool {
        x < W && y < H && self.dirty[y][x]
    }

    fn mark_dirty(&mut self, (x, y): (usize, usize)) {
        if x < W && y < H {
            self.dirty[y][x] = true;
        }
    }

    pub fn enable_cursor(&mut self) {
        self.mark_dirty(self.cursor);
        self.cursor_enabled = true;
    }

    pub fn disable_cursor(&mut self) {
        self.mark_dirty(self.cursor);
        self.cursor_enabled = false;
    }

    /// Move the cursor. While it is visible, both the cell it leaves and the cell it lands on
    /// need redrawing.
    pub fn move_cursor(&mut self, x: usize, y: usize) {
        if self.cursor_enabled {
            self.mark_dirty(self.cursor);
            self.mark_dirty((x, y));
        }
        self.cursor = (x, y);
    }

    /// The cursor position, if the cursor is enabled.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        match self.cursor_enabled {
            true => Some(self.cursor),
            false => None,
        }
    }

    /// Mark every cell dirty, e.g. after the panel has been cleared behind the grid's back.
    pub fn invalidate(&mut self) {
        self.dirty = [[true; W]; H];
    }

    /// Set every cell to 0. Only cells that held something else become dirty.
    pub fn clear(&mut self) {
        for y in 0..H {
            for x in 0..W {
                self.set(x, y, 0);
            }
        }
    }

    /// Start a scan over the dirty cells.
    pub fn dirties(&self) -> Dirties {
        Dirties { index: 0 }
    }
}

/// A restartable row-major scan over the dirty cells of a `Screen`.
///
/// The cursor does not borrow the screen, so cells can be read (and their flags cleared) between
/// steps. Each step resumes after the last cell yielded, so a cell is yielded at most once per
/// scan, and a cell cleared before the scan reaches it is not yielded at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dirties {
    index: usize,
}

impl Dirties {
    /// Find the next dirty cell at or after the current position.
    pub fn next_dirty<const W: usize, const H: usize>(
        &mut self,
        screen: &Screen<W, H>,
    ) -> Option<(usize, usize)> {
        while self.index < W * H {
            let (x, y) = (self.index % W, self.index / W);
            self.index += 1;
            if screen.dirty[y][x] {
                return Some((x, y));
            }
        }
        None
    }

    /// Go back to the first cell.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}
