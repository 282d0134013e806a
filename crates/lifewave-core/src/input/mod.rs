// crates/lifewave-core/src/input/mod.rs

pub mod binder;
pub mod event;
