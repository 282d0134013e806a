pub mod error;
pub mod random;
pub mod validate;

pub mod dynamics;
pub mod grid;
pub mod input;
pub mod output;
pub mod preset;
pub mod stats;

pub use crate::dynamics::engine::LifeEngine;
pub use crate::dynamics::state::{Direction, RuleParams, TickOutcome, WaveState};
pub use crate::grid::store::Generation;
pub use crate::input::event::Event;
pub use crate::output::panel::VirtualPanel;
pub use crate::preset::preset::{Preset, PresetMeta, SharedData};
