// crates/lifewave-cli/src/cmd/preset.rs

use anyhow::Context;
use clap::{Args, Subcommand};
use lifewave_core::dynamics::wave::ticks_per_generation;
use lifewave_core::preset::bank::Bank;
use lifewave_core::preset::defaults::{default_meta, default_preset, PRESET_COUNT};
use lifewave_core::preset::format::preset_id_hex;
use lifewave_core::preset::store::{init_presets, PresetStore};
use lifewave_core::validate::validate_preset;
use lifewave_core::{Generation, Preset, PresetMeta, RuleParams};

use crate::io::preset_file;

#[derive(Args)]
pub struct PresetArgs {
    #[command(subcommand)]
    pub cmd: PresetCmd,
}

#[derive(Subcommand)]
pub enum PresetCmd {
    /// Print all preset fields (human readable) and warn on degenerate rules
    Inspect(InspectArgs),
    /// Write a first-boot bank: every slot default, slot 0 selected
    Init(InitArgs),
    /// Copy one bank slot out into a preset file
    Export(ExportArgs),
    /// Build a preset file from rule values and an ASCII cell pattern
    New(NewArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    /// Preset path (.wlp)
    #[arg(long)]
    pub preset: String,
}

#[derive(Args)]
pub struct InitArgs {
    /// Bank output path (.wlb)
    #[arg(long)]
    pub out: String,

    /// Number of slots
    #[arg(long, default_value_t = PRESET_COUNT)]
    pub slots: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Bank path (.wlb)
    #[arg(long)]
    pub bank: String,

    /// Slot to export; defaults to the selected slot
    #[arg(long)]
    pub slot: Option<usize>,

    /// Preset output path (.wlp)
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct NewArgs {
    /// Preset output path (.wlp)
    #[arg(long)]
    pub out: String,

    #[arg(long, default_value_t = 2)]
    pub live_min: u8,
    #[arg(long, default_value_t = 3)]
    pub live_max: u8,
    #[arg(long, default_value_t = 2)]
    pub birth_min: u8,
    #[arg(long, default_value_t = 3)]
    pub birth_max: u8,

    #[arg(long)]
    pub wave_repeat: Option<u16>,

    /// Text file of rows, `#` = alive
    #[arg(long)]
    pub cells: Option<String>,
}

pub fn run(args: PresetArgs) -> anyhow::Result<()> {
    match args.cmd {
        PresetCmd::Inspect(a) => cmd_inspect(a),
        PresetCmd::Init(a) => cmd_init(a),
        PresetCmd::Export(a) => cmd_export(a),
        PresetCmd::New(a) => cmd_new(a),
    }
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let (p, meta) = preset_file::load_wlp(&a.preset)?;

    println!("preset_path  = {}", a.preset);
    println!("preset_id    = {}", preset_id_hex(&p, &meta));

    println!("live_min     = {}", p.params.live_min);
    println!("live_max     = {}", p.params.live_max);
    println!("birth_min    = {}", p.params.birth_min);
    println!("birth_max    = {}", p.params.birth_max);

    println!("wave_repeat  = {}", p.wave.wave_repeat);
    println!("wave_count   = {}", p.wave.wave_count);
    println!("cv_row       = {}", p.wave.cv_row);
    println!(
        "ticks/gen    = {}",
        ticks_per_generation(p.wave.wave_repeat)
    );

    println!("live_cells   = {}", p.cells.live_count());
    for row in p.cells.to_rows() {
        println!("  {row}");
    }
    println!("glyph        = {:02x?}", meta.glyph);

    println!();
    println!("--- diagnostics ---");
    diagnostics(&p);

    Ok(())
}

fn diagnostics(p: &Preset) {
    if let Err(e) = validate_preset(p) {
        println!("WARN: preset will not load: {e}");
    }

    let r = p.params;
    if r.live_min > r.live_max {
        println!(
            "WARN: survival range is empty (live_min={} > live_max={}). Every live cell dies.",
            r.live_min, r.live_max
        );
    }
    if r.birth_min > r.birth_max {
        println!(
            "WARN: birth range is empty (birth_min={} > birth_max={}). No cell is ever born.",
            r.birth_min, r.birth_max
        );
    }
    if r.birth_min == 0 {
        println!("WARN: birth_min=0: isolated dead cells are born; the grid floods.");
    }
    if p.cells.is_extinct() {
        println!("NOTE: grid is empty; the first generation advance reseeds it.");
    }
}

fn cmd_init(a: InitArgs) -> anyhow::Result<()> {
    if a.slots == 0 || a.slots > u8::MAX as usize {
        anyhow::bail!("--slots must be in 1..=255, got {}", a.slots);
    }
    let mut bank = Bank::with_slots(a.slots);
    init_presets(&mut bank)?;
    preset_file::save_wlb(&a.out, &bank)?;
    eprintln!("[preset] init {}: slots={}", a.out, bank.preset_count());
    Ok(())
}

fn cmd_export(a: ExportArgs) -> anyhow::Result<()> {
    let bank = preset_file::load_wlb(&a.bank)?;
    let slot = a.slot.unwrap_or_else(|| bank.preset_index());
    let preset = bank
        .load_preset(slot)
        .with_context(|| format!("bank {}", a.bank))?;
    let meta = bank.load_meta(slot)?;
    preset_file::save_wlp(&a.out, &preset, &meta)?;
    eprintln!(
        "[preset] export {} slot={} -> {} id={}",
        a.bank,
        slot,
        a.out,
        preset_id_hex(&preset, &meta)
    );
    Ok(())
}

fn cmd_new(a: NewArgs) -> anyhow::Result<()> {
    let mut p = default_preset();
    p.params = RuleParams {
        live_min: a.live_min,
        live_max: a.live_max,
        birth_min: a.birth_min,
        birth_max: a.birth_max,
    };
    if let Some(w) = a.wave_repeat {
        p.wave.wave_repeat = w;
    }
    if let Some(path) = a.cells.as_deref() {
        let text = std::fs::read_to_string(path).with_context(|| format!("read cells {path}"))?;
        let rows: Vec<&str> = text.lines().collect();
        p.cells = Generation::from_rows(&rows);
    }
    validate_preset(&p)?;

    let meta: PresetMeta = default_meta();
    preset_file::save_wlp(&a.out, &p, &meta)?;
    eprintln!("[preset] new {} id={}", a.out, preset_id_hex(&p, &meta));
    Ok(())
}
