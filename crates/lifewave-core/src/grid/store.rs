// crates/lifewave-core/src/grid/store.rs

use crate::grid::{wrap_x, wrap_y, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// One complete generation: GRID_WIDTH x GRID_HEIGHT cells, indexed `[y][x]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation {
    cells: [[bool; GRID_WIDTH]; GRID_HEIGHT],
}

impl Default for Generation {
    fn default() -> Self {
        Self::empty()
    }
}

impl Generation {
    pub const fn empty() -> Self {
        Self {
            cells: [[false; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    /// Read a cell; coordinates wrap.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.cells[wrap_y(y)][wrap_x(x)]
    }

    /// Write a cell; coordinates wrap.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        self.cells[wrap_y(y)][wrap_x(x)] = alive;
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Live cells in row `y` (wrapped).
    pub fn row_live_count(&self, y: isize) -> usize {
        self.cells[wrap_y(y)].iter().filter(|&&c| c).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.live_count() == 0
    }

    /// Iterate `(x, y, alive)` in x-major order (all rows of column 0 first).
    pub fn iter_x_major(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        (0..GRID_WIDTH)
            .flat_map(move |x| (0..GRID_HEIGHT).map(move |y| (x, y, self.cells[y][x])))
    }

    /// Pack into GRID_CELLS/8 bytes, row-major, least significant bit first.
    pub fn to_packed(&self) -> [u8; GRID_CELLS / 8] {
        let mut out = [0u8; GRID_CELLS / 8];
        for (i, &alive) in self.cells.iter().flatten().enumerate() {
            if alive {
                out[i / 8] |= 1 << (i % 8);
            }
        }
        out
    }

    pub fn from_packed(bytes: &[u8; GRID_CELLS / 8]) -> Self {
        let mut g = Self::empty();
        for i in 0..GRID_CELLS {
            if bytes[i / 8] & (1 << (i % 8)) != 0 {
                g.cells[i / GRID_WIDTH][i % GRID_WIDTH] = true;
            }
        }
        g
    }

    /// Build from ASCII rows (`#` alive, anything else dead). Missing rows/columns stay dead.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut g = Self::empty();
        for (y, row) in rows.iter().take(GRID_HEIGHT).enumerate() {
            for (x, b) in row.bytes().take(GRID_WIDTH).enumerate() {
                g.cells[y][x] = b == b'#';
            }
        }
        g
    }

    /// ASCII rows, `#` alive and `.` dead.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

/// Double-buffered generation storage.
///
/// The parity flag that selects the active buffer is private: callers read
/// `current()`, write the scratch buffer through `next_mut()` and make it active
/// with `commit()`.
#[derive(Clone, Debug, Default)]
pub struct GridStore {
    buffers: [Generation; 2],
    gen: usize,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `initial` as the active generation.
    pub fn from_generation(initial: Generation) -> Self {
        Self {
            buffers: [initial, Generation::empty()],
            gen: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Generation {
        &self.buffers[self.gen]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Generation {
        &mut self.buffers[self.gen]
    }

    #[inline]
    pub fn next_mut(&mut self) -> &mut Generation {
        &mut self.buffers[1 - self.gen]
    }

    /// Split borrow: (current, scratch).
    pub fn split(&mut self) -> (&Generation, &mut Generation) {
        let (a, b) = self.buffers.split_at_mut(1);
        if self.gen == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        }
    }

    /// Make the scratch buffer the active one.
    #[inline]
    pub fn commit(&mut self) {
        self.gen = 1 - self.gen;
    }

    #[inline]
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.current().get(x, y)
    }

    #[inline]
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        self.current_mut().set(x, y, alive);
    }
}
