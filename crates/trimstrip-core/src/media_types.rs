// crates/trimstrip-core/src/media_types.rs
//
// Types that flow across the channel between trimstrip-media and the host.
// No channels, no threads; just plain data.

use uuid::Uuid;

/// Identifies one thumbnail request within one layout pass.
///
/// `generation` is bumped on every relayout; a result whose tag carries a
/// stale generation (or an index the current layout no longer has) is
/// discarded on arrival, which is the whole cancellation story for in-flight
/// requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileTag {
    pub generation: u64,
    pub index:      usize,
}

/// A decoded thumbnail, RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumbnail {
    pub width:  u32,
    pub height: u32,
    pub data:   Vec<u8>,
}

/// One fire-and-forget request issued by a relayout.
#[derive(Clone, Debug)]
pub struct ThumbnailRequest {
    /// The bound asset at the time of the relayout. Routes the request to
    /// the right source when one worker serves several assets.
    pub asset: Uuid,
    pub tag:   TileTag,
    /// Timestamp to thumbnail, seconds into the asset.
    pub time:  f64,
}

/// What comes back from the worker. `image` is None when the source had
/// nothing for that time; the tile stays blank, no retry.
#[derive(Clone, Debug)]
pub struct ThumbnailResult {
    pub asset: Uuid,
    pub tag:   TileTag,
    pub image: Option<Thumbnail>,
}
