// crates/lifewave-cli/src/io/mod.rs

pub mod preset_file;
pub mod script;
pub mod trace;
