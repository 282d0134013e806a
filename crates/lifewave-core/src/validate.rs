use crate::dynamics::state::{MAX_THRESHOLD, MAX_WAVE_REPEAT};
use crate::error::{LifeError, Result};
use crate::grid::GRID_HEIGHT;
use crate::output::Levels;
use crate::preset::preset::Preset;

pub fn validate_preset(p: &Preset) -> Result<()> {
    let thresholds = [
        ("live_min", p.params.live_min),
        ("live_max", p.params.live_max),
        ("birth_min", p.params.birth_min),
        ("birth_max", p.params.birth_max),
    ];
    for (name, v) in thresholds {
        if v > MAX_THRESHOLD {
            return Err(LifeError::Validation(format!(
                "{name} must be <= {MAX_THRESHOLD}, got {v}"
            )));
        }
    }

    // min > max is allowed: the range simply matches nothing.

    if p.wave.wave_repeat > MAX_WAVE_REPEAT {
        return Err(LifeError::Validation(format!(
            "wave_repeat must be <= {MAX_WAVE_REPEAT}, got {}",
            p.wave.wave_repeat
        )));
    }

    if p.wave.cv_row as usize >= GRID_HEIGHT {
        return Err(LifeError::Validation(format!(
            "cv_row must be < {GRID_HEIGHT}, got {}",
            p.wave.cv_row
        )));
    }

    Ok(())
}

/// Brightness levels are 4-bit.
pub fn validate_levels(l: &Levels) -> Result<()> {
    for (name, v) in [
        ("matrix_on", l.matrix_on),
        ("ring_cell", l.ring_cell),
        ("ring_indicator", l.ring_indicator),
    ] {
        if v > 15 {
            return Err(LifeError::Validation(format!("{name} must be <= 15, got {v}")));
        }
    }
    Ok(())
}
