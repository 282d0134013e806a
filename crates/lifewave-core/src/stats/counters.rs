// crates/lifewave-core/src/stats/counters.rs

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub ticks: u64,
    pub generations: u64,
    /// Reseeds after extinction (encoder reseeds are counted in `forced_reseeds`).
    pub reseeds: u64,
    pub forced_reseeds: u64,
    pub presses: u64,
    pub turns: u64,
    pub ignored: u64,
}
