// crates/lifewave-core/src/preset/preset.rs

use crate::dynamics::state::{RuleParams, WaveState};
use crate::grid::store::Generation;
use crate::output::Levels;

/// Per-preset engine state: what gets stored and restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub params: RuleParams,
    pub wave: WaveState,
    /// The active generation.
    pub cells: Generation,
}

/// Per-preset metadata: an 8x8 glyph, one byte per row, bit 0 = leftmost column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresetMeta {
    pub glyph: [u8; 8],
}

/// Data shared by all presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SharedData {
    pub levels: Levels,
}
