// crates/lifewave-cli/src/io/trace.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use lifewave_core::{Generation, TickOutcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TraceFmt {
    /// {"tick":N,"row":R,"cv":L,"advanced":B,"reseeded":B,"live":N}
    Jsonl,
    /// Packed 46-byte records: tick:u64 row:u8 cv:u16 flags:u8 live:u16 cells:[32]
    Bin,
}

pub const BIN_RECORD_LEN: usize = 8 + 1 + 2 + 1 + 2 + 32;

/// Accumulates one record per tick; written out once by `finish`.
pub struct TraceSink {
    fmt: TraceFmt,
    buf: Vec<u8>,
    pub records: u64,
}

impl TraceSink {
    pub fn new(fmt: TraceFmt) -> Self {
        Self {
            fmt,
            buf: Vec::new(),
            records: 0,
        }
    }

    pub fn record(&mut self, tick: u64, out: &TickOutcome, g: &Generation) {
        let live = g.live_count() as u16;
        match self.fmt {
            TraceFmt::Jsonl => {
                self.buf.extend_from_slice(
                    format!(
                        "{{\"tick\":{},\"row\":{},\"cv\":{},\"advanced\":{},\"reseeded\":{},\"live\":{}}}\n",
                        tick, out.cv_row, out.cv_level, out.advanced, out.reseeded, live
                    )
                    .as_bytes(),
                );
            }
            TraceFmt::Bin => {
                let flags = (out.advanced as u8) | ((out.reseeded as u8) << 1);
                self.buf.extend_from_slice(&tick.to_le_bytes());
                self.buf.push(out.cv_row);
                self.buf.extend_from_slice(&out.cv_level.to_le_bytes());
                self.buf.push(flags);
                self.buf.extend_from_slice(&live.to_le_bytes());
                self.buf.extend_from_slice(&g.to_packed());
            }
        }
        self.records += 1;
        debug_assert!(
            self.fmt != TraceFmt::Bin || self.buf.len() == self.records as usize * BIN_RECORD_LEN
        );
    }

    /// Write to `path`, zstd-compressed when `zstd_level` is set. Returns bytes written.
    pub fn finish(self, path: &str, zstd_level: Option<i32>) -> Result<usize> {
        let bytes = match zstd_level {
            Some(level) => zstd::encode_all(self.buf.as_slice(), level)
                .with_context(|| format!("zstd compress trace {path}"))?,
            None => self.buf,
        };
        std::fs::write(path, &bytes).with_context(|| format!("write trace {path}"))?;
        Ok(bytes.len())
    }
}
