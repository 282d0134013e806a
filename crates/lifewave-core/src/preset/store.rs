// crates/lifewave-core/src/preset/store.rs
//
// Persistence collaborator contract plus first-boot / start-up helpers.

use crate::dynamics::engine::LifeEngine;
use crate::error::Result;
use crate::preset::defaults::{default_meta, default_preset, default_shared};
use crate::preset::preset::{Preset, PresetMeta, SharedData};
use crate::random::RandomSource;

/// Preset storage keyed by slot index, plus shared data and the selected slot.
pub trait PresetStore {
    fn preset_count(&self) -> usize;
    fn load_preset(&self, index: usize) -> Result<Preset>;
    fn load_meta(&self, index: usize) -> Result<PresetMeta>;
    fn store_preset(&mut self, index: usize, preset: &Preset, meta: &PresetMeta) -> Result<()>;
    fn load_shared(&self) -> Result<SharedData>;
    fn store_shared(&mut self, shared: &SharedData) -> Result<()>;
    fn preset_index(&self) -> usize;
    fn store_preset_index(&mut self, index: usize) -> Result<()>;
}

/// First boot: every slot gets the default preset, shared data is defaulted and
/// slot 0 is selected.
pub fn init_presets<S: PresetStore + ?Sized>(store: &mut S) -> Result<()> {
    let preset = default_preset();
    let meta = default_meta();
    for i in 0..store.preset_count() {
        store.store_preset(i, &preset, &meta)?;
    }
    store.store_shared(&default_shared())?;
    store.store_preset_index(0)
}

/// Start-up: build an engine from the selected slot and the shared data.
/// Returns the selected index with the engine.
pub fn init_engine<S, R>(store: &S, rng: R) -> Result<(usize, LifeEngine<R>)>
where
    S: PresetStore + ?Sized,
    R: RandomSource,
{
    let index = store.preset_index();
    let preset = store.load_preset(index)?;
    let shared = store.load_shared()?;
    let engine = LifeEngine::new(&preset, &shared, rng)?;
    Ok((index, engine))
}

/// Save the engine's current state into `index`, keeping that slot's metadata.
pub fn save_engine<S, R>(store: &mut S, index: usize, engine: &LifeEngine<R>) -> Result<()>
where
    S: PresetStore + ?Sized,
    R: RandomSource,
{
    let meta = store.load_meta(index)?;
    store.store_preset(index, &engine.snapshot(), &meta)?;
    store.store_preset_index(index)
}
