// crates/lifewave-core/src/output/mod.rs

pub mod hw;
pub mod panel;
pub mod projector;

pub const RING_COUNT: usize = 4;
pub const RING_SIZE: usize = 64;

/// Largest CV level on the reference hardware.
pub const DEFAULT_CV_MAX_LEVEL: u16 = 65535;

/// Brightness levels (0..=15) used by the projector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Levels {
    /// Matrix LED of a live cell.
    pub matrix_on: u8,
    /// Ring LED lit by a live cell.
    pub ring_cell: u8,
    /// Ring LED of a parameter indicator segment.
    pub ring_indicator: u8,
}

impl Default for Levels {
    fn default() -> Self {
        Self {
            matrix_on: 8,
            ring_cell: 4,
            ring_indicator: 15,
        }
    }
}
