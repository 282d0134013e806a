// crates/lifewave-core/src/preset/format.rs

use crate::dynamics::state::{RuleParams, WaveState};
use crate::error::{LifeError, Result};
use crate::grid::store::Generation;
use crate::grid::GRID_CELLS;
use crate::preset::checksum::{blake3_16, crc32, hex};
use crate::preset::preset::{Preset, PresetMeta};

const MAGIC: &[u8; 4] = b"WLP1";
pub const PRESET_FORMAT_VERSION: u16 = 1;

const CELL_BYTES: usize = GRID_CELLS / 8;

/// Binary-stable preset record.
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// live_min:u8 live_max:u8 birth_min:u8 birth_max:u8
/// wave_repeat:u16 wave_count:u16 cv_row:u8
/// cells:[32]         (row-major, bit 0 of byte 0 = (0,0))
/// glyph:[8]
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(p: &Preset, meta: &PresetMeta) -> Vec<u8> {
    let mut b = Vec::with_capacity(4 + 2 + 4 + 5 + CELL_BYTES + 8 + 4 + 16);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&PRESET_FORMAT_VERSION.to_le_bytes());

    b.push(p.params.live_min);
    b.push(p.params.live_max);
    b.push(p.params.birth_min);
    b.push(p.params.birth_max);

    b.extend_from_slice(&p.wave.wave_repeat.to_le_bytes());
    b.extend_from_slice(&p.wave.wave_count.to_le_bytes());
    b.push(p.wave.cv_row);

    b.extend_from_slice(&p.cells.to_packed());
    b.extend_from_slice(&meta.glyph);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<(Preset, PresetMeta)> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(LifeError::PresetFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version != PRESET_FORMAT_VERSION {
        return Err(LifeError::PresetFormat(format!(
            "unsupported preset version {version}"
        )));
    }

    let params = RuleParams {
        live_min: read_u8(bytes, &mut i)?,
        live_max: read_u8(bytes, &mut i)?,
        birth_min: read_u8(bytes, &mut i)?,
        birth_max: read_u8(bytes, &mut i)?,
    };

    let wave = WaveState {
        wave_repeat: read_u16(bytes, &mut i)?,
        wave_count: read_u16(bytes, &mut i)?,
        cv_row: read_u8(bytes, &mut i)?,
    };

    let cells = Generation::from_packed(&read_array::<CELL_BYTES>(bytes, &mut i)?);
    let glyph = read_array::<8>(bytes, &mut i)?;

    // Verify crc32
    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(LifeError::PresetFormat("crc32 mismatch".into()));
    }

    // Verify blake3_16
    let h_expected = read_array::<16>(bytes, &mut i)
        .map_err(|_| LifeError::PresetFormat("missing blake3".into()))?;
    let h_actual = blake3_16(&bytes[0..i - 16]);
    if h_expected != h_actual {
        return Err(LifeError::PresetFormat("blake3 mismatch".into()));
    }

    if i != bytes.len() {
        return Err(LifeError::PresetFormat(format!(
            "{} trailing bytes",
            bytes.len() - i
        )));
    }

    Ok((Preset { params, wave, cells }, PresetMeta { glyph }))
}

/// Stable preset id: the trailing blake3_16 that `encode()` appends.
pub fn preset_id_16(p: &Preset, meta: &PresetMeta) -> [u8; 16] {
    let enc = encode(p, meta);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn preset_id_hex(p: &Preset, meta: &PresetMeta) -> String {
    hex(&preset_id_16(p, meta))
}

pub(crate) fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(LifeError::PresetFormat("unexpected eof".into()));
    }
    Ok(())
}

pub(crate) fn read_array<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

pub(crate) fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    Ok(read_array::<1>(bytes, i)?[0])
}

pub(crate) fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(read_array::<2>(bytes, i)?))
}

pub(crate) fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array::<4>(bytes, i)?))
}
