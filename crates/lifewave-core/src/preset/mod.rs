pub mod bank;
pub mod checksum;
pub mod defaults;
pub mod format;
pub mod preset;
pub mod store;
