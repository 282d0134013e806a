// crates/lifewave-core/src/dynamics/wave.rs

use crate::dynamics::state::WaveState;
use crate::grid::GRID_HEIGHT;

/// Gate step: run at the start of each tick, before the row counter moves.
///
/// The advance path is only open while the row counter sits at 0, i.e. once per
/// full row cycle. Returns true when a generation should advance now; `wave_count`
/// is reset in that case.
pub fn gate(s: &mut WaveState) -> bool {
    if s.cv_row != 0 {
        return false;
    }
    s.wave_count = s.wave_count.saturating_add(1);
    if s.wave_count >= s.wave_repeat {
        s.wave_count = 0;
        true
    } else {
        false
    }
}

/// Move the CV row to the next row (wrapping). Returns the row to sample.
pub fn next_row(s: &mut WaveState) -> u8 {
    let next = s.cv_row as usize + 1;
    s.cv_row = if next >= GRID_HEIGHT { 0 } else { next as u8 };
    s.cv_row
}

/// Ticks between two advances for a given `wave_repeat`.
pub fn ticks_per_generation(wave_repeat: u16) -> u64 {
    GRID_HEIGHT as u64 * wave_repeat.max(1) as u64
}
