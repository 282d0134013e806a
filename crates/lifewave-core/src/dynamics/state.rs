// crates/lifewave-core/src/dynamics/state.rs

/// Upper bound for every rule threshold (a cell has 8 neighbours).
pub const MAX_THRESHOLD: u8 = 8;

/// Upper bound for `wave_repeat`.
pub const MAX_WAVE_REPEAT: u16 = 32;

/// Survival and birth neighbour ranges, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleParams {
    pub live_min: u8,
    pub live_max: u8,
    pub birth_min: u8,
    pub birth_max: u8,
}

impl RuleParams {
    /// Conway's B3/S23.
    pub const CONWAY: RuleParams = RuleParams {
        live_min: 2,
        live_max: 3,
        birth_min: 3,
        birth_max: 3,
    };
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            live_min: 2,
            live_max: 3,
            birth_min: 2,
            birth_max: 3,
        }
    }
}

/// Encoder turn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// Hardware convention: non-zero is clockwise.
    pub fn from_raw(dir: u8) -> Self {
        if dir != 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// One unit step in `dir`, held inside `[0, max]`. Steps past a bound are absorbed.
#[inline]
pub fn step_clamped<T>(value: T, dir: Direction, max: T) -> T
where
    T: Copy + PartialOrd + From<u8> + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    let one = T::from(1);
    let zero = T::from(0);
    match dir {
        Direction::Up if value < max => value + one,
        Direction::Down if value > zero => value - one,
        _ => value,
    }
}

/// Tick counters driving generation advances and CV row sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveState {
    /// Row cycles per generation, `0..=MAX_WAVE_REPEAT`. 0 behaves like 1.
    pub wave_repeat: u16,
    /// Row cycles since the last advance.
    pub wave_count: u16,
    /// Row sampled for CV; also gates the advance path.
    pub cv_row: u8,
}

impl WaveState {
    pub fn new(wave_repeat: u16) -> Self {
        Self {
            wave_repeat,
            wave_count: 0,
            cv_row: 0,
        }
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new(MAX_WAVE_REPEAT)
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// A new generation became active.
    pub advanced: bool,
    /// The advance produced an extinct grid and a seed walk was added.
    pub reseeded: bool,
    /// Row sampled for the CV output on this tick.
    pub cv_row: u8,
    /// Level written to the CV output.
    pub cv_level: u16,
}
