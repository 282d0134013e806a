// crates/lifewave-core/src/input/event.rs

use crate::dynamics::state::Direction;

/// Events delivered by the host dispatcher.
///
/// Only `Tick`, `GridKey` and `ArcEncoder` change engine state; every other class is
/// accepted and ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Periodic timer.
    Tick,
    GridKey { x: u8, y: u8, pressed: bool },
    ArcEncoder { encoder: u8, dir: Direction },

    MainClock,
    ClockSwitched,
    Gate { input: u8, on: bool },
    GridConnected,
    GridKeyHeld { x: u8, y: u8 },
    FrontButton,
    FrontButtonHeld,
    Button { index: u8 },
    I2c(Vec<u8>),
    MidiConnected,
    MidiNote { note: u8, velocity: u8 },
    MidiCc { cc: u8, value: u8 },
    MidiAftertouch { note: u8, value: u8 },
    ShnthBar { bar: u8, value: u16 },
    ShnthAntenna { antenna: u8, value: u16 },
    ShnthButton { button: u8, pressed: bool },
}

impl Event {
    /// Whether the engine reacts to this event class at all.
    pub fn is_bound(&self) -> bool {
        matches!(
            self,
            Event::Tick | Event::GridKey { .. } | Event::ArcEncoder { .. }
        )
    }
}
