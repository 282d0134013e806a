// crates/lifewave-core/src/output/projector.rs
//
// Pure views of engine state. Nothing here mutates the grid or the parameters.

use std::ops::Range;

use crate::dynamics::state::{RuleParams, MAX_THRESHOLD, MAX_WAVE_REPEAT};
use crate::grid::store::Generation;
use crate::grid::{GRID_HEIGHT, GRID_WIDTH};
use crate::output::hw::{ArcLeds, CvOut, GridLeds};
use crate::output::{Levels, RING_SIZE};

/// Positions per threshold step on rings 0..=2 (8 steps fill a ring).
const THRESHOLD_SEGMENT: usize = RING_SIZE / MAX_THRESHOLD as usize;

/// Positions per `wave_repeat` step on ring 3.
const WAVE_SEGMENT: usize = RING_SIZE / MAX_WAVE_REPEAT as usize;

/// Everything the ring view depends on besides the cells.
#[derive(Clone, Copy, Debug)]
pub struct RingInputs {
    pub params: RuleParams,
    pub wave_repeat: u16,
}

pub fn render_matrix<G: GridLeds + ?Sized>(g: &Generation, levels: &Levels, out: &mut G) {
    out.clear_all();

    let maxx = GRID_WIDTH.min(out.column_count());
    let maxy = GRID_HEIGHT.min(out.row_count());

    for x in 0..maxx {
        for y in 0..maxy {
            let level = if g.get(x as isize, y as isize) {
                levels.matrix_on
            } else {
                0
            };
            out.set_led(x, y, level);
        }
    }

    out.refresh();
}

/// Ring slot for a cell. `x * y` on purpose: many cells share a slot and the
/// cells of row 0 / column 0 all land on ring 0 position 0.
#[inline]
pub fn ring_slot(x: usize, y: usize) -> (usize, usize) {
    let index = x * y;
    (index / RING_SIZE, index % RING_SIZE)
}

/// Indicator segment `[(v-1)*width, v*width)`; none for `v == 0`.
pub fn indicator_segment(value: usize, width: usize) -> Option<Range<usize>> {
    if value == 0 {
        return None;
    }
    let end = (value * width).min(RING_SIZE);
    let start = ((value - 1) * width).min(end);
    Some(start..end)
}

pub fn render_ring<A: ArcLeds + ?Sized>(
    g: &Generation,
    inputs: RingInputs,
    levels: &Levels,
    out: &mut A,
) {
    out.clear_all();

    // Writes dead cells too, so a later dead cell darkens a shared slot.
    for (x, y, alive) in g.iter_x_major() {
        let (ring, pos) = ring_slot(x, y);
        out.set_led(ring, pos, if alive { levels.ring_cell } else { 0 });
    }

    let p = inputs.params;
    let segments = [
        (0, indicator_segment(p.live_max as usize, THRESHOLD_SEGMENT)),
        (1, indicator_segment(p.birth_min as usize, THRESHOLD_SEGMENT)),
        (2, indicator_segment(p.birth_max as usize, THRESHOLD_SEGMENT)),
        (3, indicator_segment(inputs.wave_repeat as usize, WAVE_SEGMENT)),
    ];
    for (ring, seg) in segments {
        if let Some(range) = seg {
            for pos in range {
                out.set_led(ring, pos, levels.ring_indicator);
            }
        }
    }

    out.refresh();
}

/// CV level for one row: `(max_level / GRID_WIDTH) * live_cells_in_row`.
pub fn cv_level(g: &Generation, row: u8, max_level: u16) -> u16 {
    let step = max_level / GRID_WIDTH as u16;
    step * g.row_live_count(row as isize) as u16
}

/// Sample `row` and write it to CV channel 0. Returns the level written.
pub fn render_cv<C: CvOut + ?Sized>(g: &Generation, row: u8, out: &mut C) -> u16 {
    let level = cv_level(g, row, out.max_level());
    out.set_cv(0, level);
    level
}
