// crates/lifewave-cli/src/cmd/mod.rs

pub mod preset;
pub mod sim;
