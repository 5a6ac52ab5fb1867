// crates/trimstrip-media/src/lib.rs
//
// The asynchronous half of the trim strip: a background worker that turns
// generation-tagged tile requests into thumbnails via host-provided
// sources. The geometry core (trimstrip-core) never sees a thread or a
// channel; it consumes ThumbnailResults the host drains from here.

pub mod helpers;
pub mod worker;

pub use worker::{ThumbnailSource, ThumbnailWorker};
