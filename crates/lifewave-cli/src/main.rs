// crates/lifewave-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "lifewave-cli")]
#[command(about = "Life engine host: virtual panel, presets and event scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the engine against a virtual panel (ticks + optional event script)
    Sim(cmd::sim::SimArgs),

    /// Preset and bank tools (.wlp / .wlb)
    Preset(cmd::preset::PresetArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Sim(args) => cmd::sim::run(args),
        Commands::Preset(args) => cmd::preset::run(args),
    }
}
