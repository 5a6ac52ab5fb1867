// crates/trimstrip-core/src/tiles.rs
//
// Thumbnail tile layout for the strip.
//
// A relayout is a pure function of LayoutParams: it derives tile size from
// the viewport height and aspect ratio, content width from viewport width ×
// duration factor × zoom, and slices the content into `ceil(cw / tw)` tiles
// whose widths sum to exactly the content width (the last tile absorbs the
// rounding remainder). Each relayout bumps the generation; delivered images
// are checked against it so results that outlived their layout die here.

use crate::media_types::{Thumbnail, TileTag};

/// One thumbnail-sized segment of the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub index:      usize,
    /// Timestamp this tile previews, seconds into the asset.
    pub start_time: f64,
    /// Pixel width. Equal to the nominal tile width except for the last
    /// tile, which may be narrower (never negative).
    pub width:      f32,
}

/// Inputs a relayout depends on. Two relayouts with equal params produce the
/// same tile set, which is why `recompute` can skip regeneration (and the
/// request storm that comes with it) when they haven't changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub duration:              f64,
    pub aspect_ratio:          f32,
    pub zoom:                  f32,
    pub viewport_width:        f32,
    pub viewport_height:       f32,
    pub max_onscreen_duration: f64,
}

impl LayoutParams {
    /// Total strip width at these params. The duration factor keeps tile
    /// count bounded for very long media: past `max_onscreen_duration` the
    /// strip grows (and scrolls) instead of squeezing more into view.
    pub fn content_width(&self) -> f32 {
        let factor = (self.duration / self.max_onscreen_duration).max(1.0) as f32;
        self.viewport_width * factor * self.zoom
    }
}

/// What a `recompute` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relayout {
    /// Params match the last successful computation; nothing regenerated,
    /// no new requests owed, generation untouched.
    Unchanged,
    /// Degenerate params (no duration yet, non-normal aspect or tile size).
    /// Prior tiles and generation stay as they were.
    Suppressed,
    /// New tile set in place; generation bumped; caller owes one thumbnail
    /// request per tile.
    Changed,
}

pub struct TileStrip {
    tiles:         Vec<Tile>,
    /// One slot per tile, filled as results arrive. `None` = still blank;
    /// either awaiting this generation's request or the source had nothing.
    slots:         Vec<Option<Thumbnail>>,
    tile_width:    f32,
    tile_height:   f32,
    content_width: f32,
    generation:    u64,
    last_params:   Option<LayoutParams>,
}

impl TileStrip {
    pub fn new() -> Self {
        Self {
            tiles:         Vec::new(),
            slots:         Vec::new(),
            tile_width:    0.0,
            tile_height:   0.0,
            content_width: 0.0,
            generation:    0,
            last_params:   None,
        }
    }

    pub fn tiles(&self) -> &[Tile] { &self.tiles }
    pub fn tile_count(&self) -> usize { self.tiles.len() }
    pub fn tile_width(&self) -> f32 { self.tile_width }
    pub fn tile_height(&self) -> f32 { self.tile_height }
    pub fn content_width(&self) -> f32 { self.content_width }
    pub fn generation(&self) -> u64 { self.generation }

    /// Image currently shown in slot `index`, if one has arrived.
    pub fn slot(&self, index: usize) -> Option<&Thumbnail> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Recompute the tile set for `params`.
    ///
    /// Skips regeneration when params are unchanged from the last successful
    /// pass, and suppresses it entirely while params are degenerate (asset
    /// not bound yet, zero-sized viewport, non-normal aspect ratio) so the
    /// previous layout keeps rendering until real numbers arrive.
    pub fn recompute(&mut self, params: LayoutParams) -> Relayout {
        if self.last_params == Some(params) {
            return Relayout::Unchanged;
        }
        if params.duration <= 0.0 {
            return Relayout::Suppressed;
        }
        let tile_height = params.viewport_height.abs();
        let tile_width = (tile_height * params.aspect_ratio).abs();
        if !tile_height.is_normal() || !tile_width.is_normal() {
            return Relayout::Suppressed;
        }
        let content_width = params.content_width();
        if !content_width.is_normal() || content_width <= 0.0 {
            return Relayout::Suppressed;
        }

        let count = (content_width / tile_width).ceil() as usize;
        let increment = params.duration / count as f64;

        self.tiles.clear();
        for index in 0..count {
            let width = if index + 1 == count {
                // Last tile takes whatever is left so widths sum to the
                // exact content width; clamped; remainder math can go a
                // hair negative when cw is an exact multiple of tw.
                (content_width - (count as f32 - 1.0) * tile_width).max(0.0)
            } else {
                tile_width
            };
            self.tiles.push(Tile {
                index,
                start_time: increment * index as f64,
                width,
            });
        }

        self.slots = vec![None; count];
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self.content_width = content_width;
        self.generation += 1;
        self.last_params = Some(params);
        Relayout::Changed
    }

    /// Apply a delivered thumbnail. Returns true only when the image landed:
    /// the tag's generation must be current, its index must address a live
    /// slot, and the slot must still be blank (a slot that already has this
    /// generation's image keeps it). A `None` image is accepted silently;
    /// the tile stays blank and nothing retries.
    pub fn apply(&mut self, tag: TileTag, image: Option<Thumbnail>) -> bool {
        if tag.generation != self.generation {
            return false;
        }
        let Some(slot) = self.slots.get_mut(tag.index) else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        match image {
            Some(img) => {
                *slot = Some(img);
                true
            }
            None => false,
        }
    }
}

impl Default for TileStrip {
    fn default() -> Self {
        Self::new()
    }
}
