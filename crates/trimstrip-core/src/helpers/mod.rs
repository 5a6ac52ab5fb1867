// crates/trimstrip-core/src/helpers/mod.rs

pub mod time;
