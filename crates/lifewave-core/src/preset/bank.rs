// crates/lifewave-core/src/preset/bank.rs

use crate::error::{LifeError, Result};
use crate::output::Levels;
use crate::preset::checksum::crc32;
use crate::preset::defaults::{default_meta, default_preset, default_shared, PRESET_COUNT};
use crate::preset::format::{self, read_array, read_u16, read_u32, read_u8};
use crate::preset::preset::{Preset, PresetMeta, SharedData};
use crate::preset::store::PresetStore;

const MAGIC: &[u8; 4] = b"WLB1";
pub const BANK_FORMAT_VERSION: u16 = 1;

/// In-memory preset bank. Implements `PresetStore` directly; hosts persist it
/// as a whole with `encode` / `decode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bank {
    pub selected: usize,
    pub shared: SharedData,
    pub slots: Vec<(Preset, PresetMeta)>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::with_slots(PRESET_COUNT)
    }
}

impl Bank {
    /// `n` default slots, slot 0 selected.
    pub fn with_slots(n: usize) -> Self {
        Self {
            selected: 0,
            shared: default_shared(),
            slots: vec![(default_preset(), default_meta()); n],
        }
    }

    fn slot(&self, index: usize) -> Result<&(Preset, PresetMeta)> {
        self.slots.get(index).ok_or_else(|| {
            LifeError::Validation(format!(
                "preset index {index} out of range (bank has {})",
                self.slots.len()
            ))
        })
    }
}

impl PresetStore for Bank {
    fn preset_count(&self) -> usize {
        self.slots.len()
    }

    fn load_preset(&self, index: usize) -> Result<Preset> {
        Ok(self.slot(index)?.0)
    }

    fn load_meta(&self, index: usize) -> Result<PresetMeta> {
        Ok(self.slot(index)?.1)
    }

    fn store_preset(&mut self, index: usize, preset: &Preset, meta: &PresetMeta) -> Result<()> {
        self.slot(index)?;
        self.slots[index] = (*preset, *meta);
        Ok(())
    }

    fn load_shared(&self) -> Result<SharedData> {
        Ok(self.shared)
    }

    fn store_shared(&mut self, shared: &SharedData) -> Result<()> {
        self.shared = *shared;
        Ok(())
    }

    fn preset_index(&self) -> usize {
        self.selected
    }

    fn store_preset_index(&mut self, index: usize) -> Result<()> {
        self.slot(index)?;
        self.selected = index;
        Ok(())
    }
}

/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// selected:u8
/// levels: matrix_on:u8 ring_cell:u8 ring_indicator:u8
/// count:u8
/// slots: repeated { len:u16 preset_record[len] }
/// crc32:u32          (over everything before crc32)
pub fn encode(bank: &Bank) -> Result<Vec<u8>> {
    if bank.slots.len() > u8::MAX as usize {
        return Err(LifeError::Validation(format!(
            "bank has {} slots, at most {} fit",
            bank.slots.len(),
            u8::MAX
        )));
    }
    let mut b = Vec::with_capacity(16 + bank.slots.len() * 96);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&BANK_FORMAT_VERSION.to_le_bytes());
    b.push(bank.selected as u8);

    let l = bank.shared.levels;
    b.extend_from_slice(&[l.matrix_on, l.ring_cell, l.ring_indicator]);

    b.push(bank.slots.len() as u8);
    for (preset, meta) in bank.slots.iter() {
        let rec = format::encode(preset, meta);
        b.extend_from_slice(&(rec.len() as u16).to_le_bytes());
        b.extend_from_slice(&rec);
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<Bank> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(LifeError::PresetFormat("bad bank magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version != BANK_FORMAT_VERSION {
        return Err(LifeError::PresetFormat(format!(
            "unsupported bank version {version}"
        )));
    }

    let selected = read_u8(bytes, &mut i)? as usize;
    let [matrix_on, ring_cell, ring_indicator] = read_array::<3>(bytes, &mut i)?;
    let count = read_u8(bytes, &mut i)? as usize;

    let mut slots = Vec::with_capacity(count);
    for _ in 0..count {
        let len = read_u16(bytes, &mut i)? as usize;
        format::need(bytes, i, len)?;
        slots.push(format::decode(&bytes[i..i + len])?);
        i += len;
    }

    let crc_expected = read_u32(bytes, &mut i)?;
    if crc_expected != crc32(&bytes[0..i - 4]) {
        return Err(LifeError::PresetFormat("bank crc32 mismatch".into()));
    }

    if selected >= slots.len() && !slots.is_empty() {
        return Err(LifeError::PresetFormat(format!(
            "selected preset {selected} out of range ({} slots)",
            slots.len()
        )));
    }

    Ok(Bank {
        selected,
        shared: SharedData {
            levels: Levels {
                matrix_on,
                ring_cell,
                ring_indicator,
            },
        },
        slots,
    })
}
