// crates/trimstrip-media/src/helpers/mod.rs

pub mod log;
