// crates/trimstrip-core/src/lib.rs
//
// Geometry/time engine for a video trim strip: tiled thumbnail layout,
// time ↔ pixel mapping, scroll bookkeeping, handle constraints and a
// playhead; everything the widget knows except how to draw or decode.
//
// Pure and single-threaded; the one asynchronous collaborator (thumbnail
// production) lives in trimstrip-media and talks back through
// generation-tagged results.

pub mod axis;
pub mod config;
pub mod events;
pub mod handles;
pub mod helpers;
pub mod media_types;
pub mod playhead;
pub mod tiles;
pub mod trimmer;
pub mod viewport;

pub use config::StripConfig;
pub use events::{DragTarget, StripEvent};
pub use handles::HandleSide;
pub use media_types::{Thumbnail, ThumbnailRequest, ThumbnailResult, TileTag};
pub use trimmer::TrimStrip;
