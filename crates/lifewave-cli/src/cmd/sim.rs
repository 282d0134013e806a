// crates/lifewave-cli/src/cmd/sim.rs

use anyhow::{bail, Context};
use clap::Args;
use lifewave_core::output::panel::VirtualPanel;
use lifewave_core::preset::defaults::{default_meta, default_preset, default_shared};
use lifewave_core::preset::format::preset_id_hex;
use lifewave_core::preset::store::PresetStore;
use lifewave_core::{Event, LifeEngine, Preset, PresetMeta, RuleParams, SharedData};

use crate::io::preset_file;
use crate::io::script::{self, Step};
use crate::io::trace::{TraceFmt, TraceSink};

#[derive(Args, Debug)]
pub struct SimArgs {
    /// Preset path (.wlp). If omitted (and no --bank), uses the built-in default preset.
    #[arg(long, conflicts_with = "bank")]
    pub preset: Option<String>,

    /// Bank path (.wlb); runs the selected slot unless --slot is given.
    #[arg(long)]
    pub bank: Option<String>,

    /// Bank slot to run (requires --bank)
    #[arg(long, requires = "bank")]
    pub slot: Option<usize>,

    /// Seed for the reseeding walk. If omitted, seeds from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Periodic ticks to run after the script (if any)
    #[arg(long, default_value_t = 256)]
    pub ticks: u64,

    /// Event script to replay before the free-running ticks
    #[arg(long)]
    pub script: Option<String>,

    // --- SIM-only overrides (do NOT mutate the preset on disk) ---
    /// Override rule thresholds: "live_min,live_max,birth_min,birth_max"
    #[arg(long)]
    pub rule: Option<String>,

    /// Override wave_repeat
    #[arg(long)]
    pub wave_repeat: Option<u16>,

    // --- virtual hardware ---
    /// Matrix columns
    #[arg(long, default_value_t = 16)]
    pub grid_cols: usize,

    /// Matrix rows
    #[arg(long, default_value_t = 16)]
    pub grid_rows: usize,

    /// Largest CV level
    #[arg(long, default_value_t = 65535)]
    pub max_level: u16,

    // --- outputs ---
    /// Per-tick trace output path
    #[arg(long)]
    pub trace: Option<String>,

    /// Trace format
    #[arg(long, value_enum, default_value_t = TraceFmt::Jsonl)]
    pub trace_fmt: TraceFmt,

    /// zstd-compress the trace at this level
    #[arg(long, requires = "trace")]
    pub zstd_level: Option<i32>,

    /// Save the final engine state to this .wlp path
    #[arg(long)]
    pub save_preset: Option<String>,

    /// Also print the four rings (hex level per position)
    #[arg(long)]
    pub show_rings: bool,

    /// Do not print the final matrix
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: SimArgs) -> anyhow::Result<()> {
    let (mut preset, meta, shared) = load_inputs(&args)?;
    apply_overrides(&mut preset, &args)?;

    eprintln!("[sim] preset_id={}", preset_id_hex(&preset, &meta));

    let mut engine = match args.seed {
        Some(seed) => LifeEngine::with_seed(&preset, &shared, seed)?,
        None => LifeEngine::from_entropy(&preset, &shared)?,
    };
    let mut panel = VirtualPanel::new(args.grid_cols, args.grid_rows, args.max_level);
    let mut trace = args.trace.as_ref().map(|_| TraceSink::new(args.trace_fmt));

    engine.render(&mut panel);

    let mut steps = match args.script.as_deref() {
        Some(p) => script::load_script(p)?,
        None => Vec::new(),
    };
    if args.ticks > 0 {
        steps.push(Step::Ticks(args.ticks));
    }

    for step in steps {
        match step {
            Step::Ticks(n) => {
                for _ in 0..n {
                    tick(&mut engine, &mut panel, trace.as_mut());
                }
            }
            Step::Event(Event::Tick) => tick(&mut engine, &mut panel, trace.as_mut()),
            Step::Event(ev) => {
                engine.handle(&ev, &mut panel);
            }
        }
    }

    if let (Some(path), Some(sink)) = (args.trace.as_deref(), trace) {
        let records = sink.records;
        let n = sink.finish(path, args.zstd_level)?;
        eprintln!("[sim] trace {path}: records={records} bytes={n}");
    }

    if let Some(path) = args.save_preset.as_deref() {
        preset_file::save_wlp(path, &engine.snapshot(), &meta)?;
        eprintln!("[sim] saved preset {path}");
    }

    if !args.quiet {
        print!("{}", panel.matrix_ascii());
    }
    if args.show_rings {
        print!("{}", panel.rings_ascii());
    }

    let s = engine.stats;
    eprintln!(
        "[sim] ok ticks={} generations={} reseeds={} forced_reseeds={} presses={} turns={} ignored={}",
        s.ticks, s.generations, s.reseeds, s.forced_reseeds, s.presses, s.turns, s.ignored
    );
    let p = engine.params;
    eprintln!(
        "[sim] live={} cv0={} rule=S{}..{}/B{}..{} wave_repeat={}",
        engine.live_count(),
        panel.cv(0),
        p.live_min,
        p.live_max,
        p.birth_min,
        p.birth_max,
        engine.wave.wave_repeat
    );

    Ok(())
}

fn tick(engine: &mut LifeEngine, panel: &mut VirtualPanel, trace: Option<&mut TraceSink>) {
    let out = engine.tick(panel);
    if let Some(t) = trace {
        t.record(engine.stats.ticks, &out, engine.current());
    }
}

fn load_inputs(args: &SimArgs) -> anyhow::Result<(Preset, PresetMeta, SharedData)> {
    if let Some(path) = args.bank.as_deref() {
        let bank = preset_file::load_wlb(path)?;
        let slot = args.slot.unwrap_or_else(|| bank.preset_index());
        let preset = bank
            .load_preset(slot)
            .with_context(|| format!("bank {path}"))?;
        let meta = bank.load_meta(slot)?;
        eprintln!("[sim] bank {path} slot={slot}");
        return Ok((preset, meta, bank.load_shared()?));
    }

    if let Some(path) = args.preset.as_deref() {
        let (preset, meta) = preset_file::load_wlp(path)?;
        return Ok((preset, meta, default_shared()));
    }

    Ok((default_preset(), default_meta(), default_shared()))
}

fn apply_overrides(preset: &mut Preset, args: &SimArgs) -> anyhow::Result<()> {
    if let Some(r) = args.rule.as_deref() {
        preset.params = parse_rule(r)?;
    }
    if let Some(w) = args.wave_repeat {
        preset.wave.wave_repeat = w;
    }
    Ok(())
}

fn parse_rule(s: &str) -> anyhow::Result<RuleParams> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("--rule {s:?}"))?;
    let [live_min, live_max, birth_min, birth_max] = parts.as_slice() else {
        bail!("--rule needs 4 comma-separated values, got {s:?}");
    };
    Ok(RuleParams {
        live_min: *live_min,
        live_max: *live_max,
        birth_min: *birth_min,
        birth_max: *birth_max,
    })
}
