// crates/lifewave-core/src/dynamics/engine.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dynamics::state::{Direction, RuleParams, TickOutcome, WaveState};
use crate::dynamics::wave;
use crate::error::Result;
use crate::grid::rule;
use crate::grid::seed::{seed, SeedPattern};
use crate::grid::store::{Generation, GridStore};
use crate::input::binder::{self, Knob};
use crate::input::event::Event;
use crate::output::hw::Panel;
use crate::output::projector::{self, RingInputs};
use crate::output::Levels;
use crate::preset::preset::{Preset, SharedData};
use crate::random::RandomSource;
use crate::stats::counters::Counters;
use crate::validate::{validate_levels, validate_preset};

/// Result of evaluating one generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationStep {
    /// Live cells produced by the rule (before any reseed).
    pub live: usize,
    pub reseeded: bool,
}

/// The life engine: grid, rule parameters, wave counters and the random source
/// used for reseeding. All methods run to completion; the host serialises calls.
pub struct LifeEngine<R: RandomSource = StdRng> {
    pub params: RuleParams,
    pub wave: WaveState,
    pub levels: Levels,
    pub stats: Counters,
    store: GridStore,
    rng: R,
    last_seed: Option<SeedPattern>,
}

impl LifeEngine<StdRng> {
    /// Engine with a deterministic seed walk sequence.
    pub fn with_seed(preset: &Preset, shared: &SharedData, seed: u64) -> Result<Self> {
        Self::new(preset, shared, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(preset: &Preset, shared: &SharedData) -> Result<Self> {
        Self::new(preset, shared, StdRng::from_entropy())
    }
}

impl<R: RandomSource> LifeEngine<R> {
    pub fn new(preset: &Preset, shared: &SharedData, rng: R) -> Result<Self> {
        validate_preset(preset)?;
        validate_levels(&shared.levels)?;
        Ok(Self {
            params: preset.params,
            wave: preset.wave,
            levels: shared.levels,
            stats: Counters::default(),
            store: GridStore::from_generation(preset.cells),
            rng,
            last_seed: None,
        })
    }

    /// Replace parameters, wave state and cells with those of `preset`.
    /// Counters and the random source carry over.
    pub fn load(&mut self, preset: &Preset) -> Result<()> {
        validate_preset(preset)?;
        self.params = preset.params;
        self.wave = preset.wave;
        self.store = GridStore::from_generation(preset.cells);
        Ok(())
    }

    /// Serializable copy of the persistent state.
    pub fn snapshot(&self) -> Preset {
        Preset {
            params: self.params,
            wave: self.wave,
            cells: *self.store.current(),
        }
    }

    #[inline]
    pub fn current(&self) -> &Generation {
        self.store.current()
    }

    #[inline]
    pub fn cell(&self, x: isize, y: isize) -> bool {
        self.store.get(x, y)
    }

    pub fn live_count(&self) -> usize {
        self.store.current().live_count()
    }

    /// The most recent seed walk, if any reseed happened yet.
    pub fn last_seed(&self) -> Option<&SeedPattern> {
        self.last_seed.as_ref()
    }

    /// One periodic tick: maybe advance a generation, then sample the next CV row.
    pub fn tick<P: Panel + ?Sized>(&mut self, panel: &mut P) -> TickOutcome {
        self.stats.ticks += 1;

        let mut reseeded = false;
        let advanced = wave::gate(&mut self.wave);
        if advanced {
            reseeded = self.step_generation().reseeded;
            self.render(panel);
        }

        let cv_row = wave::next_row(&mut self.wave);
        let cv_level = projector::render_cv(self.store.current(), cv_row, panel);

        TickOutcome {
            advanced,
            reseeded,
            cv_row,
            cv_level,
        }
    }

    /// Evaluate the rule once and make the result active, reseeding it if extinct.
    /// Does not render.
    pub fn step_generation(&mut self) -> GenerationStep {
        let live = rule::advance(&mut self.store, &self.params);
        let reseeded = live == 0;
        if reseeded {
            self.last_seed = Some(seed(self.store.next_mut(), &mut self.rng));
            self.stats.reseeds += 1;
        }
        self.store.commit();
        self.stats.generations += 1;
        GenerationStep { live, reseeded }
    }

    /// Add a fresh seed walk to the active generation.
    pub fn reseed(&mut self) -> SeedPattern {
        let pattern = seed(self.store.current_mut(), &mut self.rng);
        self.last_seed = Some(pattern);
        self.stats.forced_reseeds += 1;
        pattern
    }

    pub fn press<P: Panel + ?Sized>(&mut self, x: u8, y: u8, pressed: bool, panel: &mut P) {
        self.stats.presses += 1;
        binder::press(&mut self.store, x, y, pressed);
        self.render(panel);
    }

    pub fn turn<P: Panel + ?Sized>(&mut self, channel: u8, dir: Direction, panel: &mut P) {
        self.stats.turns += 1;
        if binder::turn(&mut self.params, &mut self.wave, channel, dir) == Some(Knob::WaveRepeat) {
            self.reseed();
        }
        self.render(panel);
    }

    /// Dispatch one host event. Returns false for event classes the engine ignores.
    pub fn handle<P: Panel + ?Sized>(&mut self, event: &Event, panel: &mut P) -> bool {
        match *event {
            Event::Tick => {
                self.tick(panel);
            }
            Event::GridKey { x, y, pressed } => self.press(x, y, pressed, panel),
            Event::ArcEncoder { encoder, dir } => self.turn(encoder, dir, panel),
            _ => {
                self.stats.ignored += 1;
                return false;
            }
        }
        true
    }

    /// Redraw matrix and rings from the active generation.
    pub fn render<P: Panel + ?Sized>(&self, panel: &mut P) {
        let g = self.store.current();
        projector::render_matrix(g, &self.levels, panel);
        projector::render_ring(
            g,
            RingInputs {
                params: self.params,
                wave_repeat: self.wave.wave_repeat,
            },
            &self.levels,
            panel,
        );
    }
}
