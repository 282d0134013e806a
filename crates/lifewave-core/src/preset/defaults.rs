// crates/lifewave-core/src/preset/defaults.rs

use crate::dynamics::state::{RuleParams, WaveState, MAX_WAVE_REPEAT};
use crate::grid::store::Generation;
use crate::preset::preset::{Preset, PresetMeta, SharedData};

/// Number of preset slots in a bank.
pub const PRESET_COUNT: usize = 8;

/// First-boot preset: S23/B23, slowest wave, empty grid.
///
/// The empty grid is reseeded by the first generation advance.
pub fn default_preset() -> Preset {
    Preset {
        params: RuleParams::default(),
        wave: WaveState::new(MAX_WAVE_REPEAT),
        cells: Generation::empty(),
    }
}

pub fn default_meta() -> PresetMeta {
    PresetMeta::default()
}

pub fn default_shared() -> SharedData {
    SharedData::default()
}
