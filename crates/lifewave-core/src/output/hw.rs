// crates/lifewave-core/src/output/hw.rs
//
// Output collaborators. The engine only talks to hardware through these traits.

use crate::output::DEFAULT_CV_MAX_LEVEL;

/// LED matrix.
pub trait GridLeds {
    fn column_count(&self) -> usize;
    fn row_count(&self) -> usize;
    fn clear_all(&mut self);
    fn set_led(&mut self, x: usize, y: usize, level: u8);
    fn refresh(&mut self);
}

/// Encoder LED rings (`ring < RING_COUNT`, `position < RING_SIZE`).
pub trait ArcLeds {
    fn clear_all(&mut self);
    fn set_led(&mut self, ring: usize, position: usize, level: u8);
    fn refresh(&mut self);
}

/// Analog control-voltage outputs.
pub trait CvOut {
    fn max_level(&self) -> u16 {
        DEFAULT_CV_MAX_LEVEL
    }
    fn set_cv(&mut self, channel: u8, level: u16);
}

/// Everything the engine renders to.
pub trait Panel: GridLeds + ArcLeds + CvOut {}

impl<T: GridLeds + ArcLeds + CvOut + ?Sized> Panel for T {}
