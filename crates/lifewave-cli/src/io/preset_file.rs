// crates/lifewave-cli/src/io/preset_file.rs

use anyhow::{Context, Result};
use lifewave_core::preset::bank::{self, Bank};
use lifewave_core::preset::format as preset_format;
use lifewave_core::{Preset, PresetMeta};

/// Load a .wlp preset file.
pub fn load_wlp(path: &str) -> Result<(Preset, PresetMeta)> {
    let bytes = std::fs::read(path).with_context(|| format!("read preset {path}"))?;
    let out = preset_format::decode(&bytes).with_context(|| format!("decode preset {path}"))?;
    Ok(out)
}

/// Save a preset as a .wlp file.
pub fn save_wlp(path: &str, preset: &Preset, meta: &PresetMeta) -> Result<()> {
    let bytes = preset_format::encode(preset, meta);
    std::fs::write(path, bytes).with_context(|| format!("write preset {path}"))?;
    Ok(())
}

/// Load a .wlb bank file.
pub fn load_wlb(path: &str) -> Result<Bank> {
    let bytes = std::fs::read(path).with_context(|| format!("read bank {path}"))?;
    let b = bank::decode(&bytes).with_context(|| format!("decode bank {path}"))?;
    Ok(b)
}

/// Save a bank as a .wlb file.
pub fn save_wlb(path: &str, b: &Bank) -> Result<()> {
    let bytes = bank::encode(b).with_context(|| format!("encode bank {path}"))?;
    std::fs::write(path, bytes).with_context(|| format!("write bank {path}"))?;
    Ok(())
}
