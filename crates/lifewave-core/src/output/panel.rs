// crates/lifewave-core/src/output/panel.rs

use crate::output::hw::{ArcLeds, CvOut, GridLeds};
use crate::output::{DEFAULT_CV_MAX_LEVEL, RING_COUNT, RING_SIZE};

pub const CV_CHANNELS: usize = 4;

/// In-memory panel: matrix, rings and CV latches, plus refresh counters.
///
/// Out-of-range writes are dropped, like a driver ignoring LEDs it does not have.
#[derive(Clone, Debug)]
pub struct VirtualPanel {
    pub columns: usize,
    pub rows: usize,
    pub cv_max: u16,
    matrix: Vec<u8>,
    rings: [[u8; RING_SIZE]; RING_COUNT],
    cv: [u16; CV_CHANNELS],
    pub grid_refreshes: u64,
    pub arc_refreshes: u64,
    pub cv_writes: u64,
}

impl Default for VirtualPanel {
    fn default() -> Self {
        Self::new(16, 16, DEFAULT_CV_MAX_LEVEL)
    }
}

impl VirtualPanel {
    pub fn new(columns: usize, rows: usize, cv_max: u16) -> Self {
        Self {
            columns,
            rows,
            cv_max,
            matrix: vec![0; columns * rows],
            rings: [[0; RING_SIZE]; RING_COUNT],
            cv: [0; CV_CHANNELS],
            grid_refreshes: 0,
            arc_refreshes: 0,
            cv_writes: 0,
        }
    }

    pub fn matrix_level(&self, x: usize, y: usize) -> u8 {
        if x < self.columns && y < self.rows {
            self.matrix[y * self.columns + x]
        } else {
            0
        }
    }

    pub fn ring(&self, ring: usize) -> Option<&[u8; RING_SIZE]> {
        self.rings.get(ring)
    }

    pub fn ring_level(&self, ring: usize, position: usize) -> u8 {
        self.rings
            .get(ring)
            .and_then(|r| r.get(position))
            .copied()
            .unwrap_or(0)
    }

    /// Lit positions on one ring, at any level.
    pub fn ring_lit(&self, ring: usize) -> Vec<usize> {
        self.rings
            .get(ring)
            .into_iter()
            .flat_map(|r| r.iter().enumerate())
            .filter(|&(_, &l)| l > 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cv(&self, channel: usize) -> u16 {
        self.cv.get(channel).copied().unwrap_or(0)
    }

    /// Matrix as ASCII: `.` off, `+` dim (< 8), `#` bright.
    pub fn matrix_ascii(&self) -> String {
        let mut s = String::with_capacity((self.columns + 1) * self.rows);
        for y in 0..self.rows {
            for x in 0..self.columns {
                s.push(match self.matrix_level(x, y) {
                    0 => '.',
                    1..=7 => '+',
                    _ => '#',
                });
            }
            s.push('\n');
        }
        s
    }

    /// One line per ring, hex digit per position level.
    pub fn rings_ascii(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut s = String::with_capacity(RING_COUNT * (RING_SIZE + 1));
        for ring in self.rings.iter() {
            for &l in ring.iter() {
                s.push(HEX[(l & 0x0F) as usize] as char);
            }
            s.push('\n');
        }
        s
    }
}

impl GridLeds for VirtualPanel {
    fn column_count(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn clear_all(&mut self) {
        self.matrix.iter_mut().for_each(|l| *l = 0);
    }

    fn set_led(&mut self, x: usize, y: usize, level: u8) {
        if x < self.columns && y < self.rows {
            self.matrix[y * self.columns + x] = level;
        }
    }

    fn refresh(&mut self) {
        self.grid_refreshes += 1;
    }
}

impl ArcLeds for VirtualPanel {
    fn clear_all(&mut self) {
        self.rings = [[0; RING_SIZE]; RING_COUNT];
    }

    fn set_led(&mut self, ring: usize, position: usize, level: u8) {
        if let Some(slot) = self.rings.get_mut(ring).and_then(|r| r.get_mut(position)) {
            *slot = level;
        }
    }

    fn refresh(&mut self) {
        self.arc_refreshes += 1;
    }
}

impl CvOut for VirtualPanel {
    fn max_level(&self) -> u16 {
        self.cv_max
    }

    fn set_cv(&mut self, channel: u8, level: u16) {
        if let Some(slot) = self.cv.get_mut(channel as usize) {
            *slot = level.min(self.cv_max);
            self.cv_writes += 1;
        }
    }
}
