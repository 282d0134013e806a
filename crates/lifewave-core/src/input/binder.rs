// crates/lifewave-core/src/input/binder.rs
//
// Discrete input -> grid edits and parameter steps. Rendering is left to the caller.

use crate::dynamics::state::{
    step_clamped, Direction, RuleParams, WaveState, MAX_THRESHOLD, MAX_WAVE_REPEAT,
};
use crate::grid::store::GridStore;

/// Encoder channel -> bound parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Knob {
    LiveMax,
    BirthMin,
    BirthMax,
    WaveRepeat,
}

impl Knob {
    pub fn from_channel(channel: u8) -> Option<Knob> {
        match channel {
            0 => Some(Knob::LiveMax),
            1 => Some(Knob::BirthMin),
            2 => Some(Knob::BirthMax),
            3 => Some(Knob::WaveRepeat),
            _ => None,
        }
    }
}

/// Press sets the cell alive; release does nothing. Never clears a cell.
pub fn press(store: &mut GridStore, x: u8, y: u8, pressed: bool) {
    if pressed {
        store.set(x as isize, y as isize, true);
    }
}

/// Step the parameter bound to `channel`. Returns the knob that was addressed, if any.
///
/// The caller must reseed the active buffer after a `Knob::WaveRepeat` turn.
pub fn turn(
    params: &mut RuleParams,
    wave: &mut WaveState,
    channel: u8,
    dir: Direction,
) -> Option<Knob> {
    let knob = Knob::from_channel(channel)?;
    match knob {
        Knob::LiveMax => params.live_max = step_clamped(params.live_max, dir, MAX_THRESHOLD),
        Knob::BirthMin => params.birth_min = step_clamped(params.birth_min, dir, MAX_THRESHOLD),
        Knob::BirthMax => params.birth_max = step_clamped(params.birth_max, dir, MAX_THRESHOLD),
        Knob::WaveRepeat => {
            wave.wave_repeat = step_clamped(wave.wave_repeat, dir, MAX_WAVE_REPEAT)
        }
    }
    Some(knob)
}
