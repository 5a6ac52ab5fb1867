// crates/trimstrip-core/src/viewport.rs
//
// Scroll bookkeeping for the strip: one horizontal offset into a content
// area of `content_width + 2 × inset` pixels, viewed through `visible_width`.
//
// All mutators clamp and report whether the offset actually moved; the
// trimmer turns a `true` into an OffsetChanged event so the host redraws and
// dependent on-screen constants refresh in the same pass.

/// Scroll state. Content width is not stored here; it changes on every
/// relayout, so mutators take the current value instead of caching a stale
/// copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    offset_x:      f32,
    visible_width: f32,
    inset:         f32,
}

impl Viewport {
    pub fn new(visible_width: f32, inset: f32) -> Self {
        Self { offset_x: 0.0, visible_width, inset }
    }

    pub fn offset_x(&self) -> f32 { self.offset_x }
    pub fn visible_width(&self) -> f32 { self.visible_width }
    pub fn inset(&self) -> f32 { self.inset }

    pub fn set_visible_width(&mut self, width: f32) {
        self.visible_width = width.max(0.0);
    }

    pub fn set_inset(&mut self, inset: f32) {
        self.inset = inset.max(0.0);
    }

    /// Largest legal offset for the given content width; the strip pinned
    /// to its right edge. Zero when everything fits on screen.
    pub fn max_offset(&self, content_width: f32) -> f32 {
        (content_width + 2.0 * self.inset - self.visible_width).max(0.0)
    }

    /// Move the offset by `dx`, clamped into `[0, max_offset]`.
    /// Returns true when the offset changed.
    pub fn scroll_by(&mut self, dx: f32, content_width: f32) -> bool {
        if !dx.is_finite() {
            return false;
        }
        self.set_offset(self.offset_x + dx, content_width)
    }

    /// Set the offset directly (clamped). Returns true when it changed.
    pub fn set_offset(&mut self, x: f32, content_width: f32) -> bool {
        let clamped = x.clamp(0.0, self.max_offset(content_width));
        if clamped == self.offset_x {
            return false;
        }
        self.offset_x = clamped;
        true
    }

    /// Nudge the offset while a dragged handle sits within `threshold` of a
    /// viewport edge. One step per call; the continuous drag keeps calling,
    /// so the strip glides instead of jumping, and a handle parked mid-view
    /// never oscillates. Gated on the content actually being wider than the
    /// viewport; when everything fits there is nowhere to scroll to.
    ///
    /// `on_screen_x` is the handle position in viewport coordinates.
    /// Returns true when the offset moved.
    pub fn auto_scroll(&mut self, on_screen_x: f32, threshold: f32, step: f32, content_width: f32) -> bool {
        if content_width <= self.visible_width {
            return false;
        }
        let dx = if on_screen_x < threshold {
            -step
        } else if on_screen_x > self.visible_width - threshold {
            step
        } else {
            return false;
        };
        self.scroll_by(dx, content_width)
    }

    /// How much of the left inset is still on screen: `inset` when scrolled
    /// fully left, shrinking to 0 as the content edge scrolls off. Aligns
    /// overlay masks with the content's left edge.
    pub fn left_on_screen_inset(&self) -> f32 {
        (self.inset - self.offset_x).max(0.0)
    }

    /// Right-edge counterpart of [`left_on_screen_inset`](Self::left_on_screen_inset).
    /// The headroom term goes negative when the content is narrower than the
    /// viewport, so the mask widens to cover the empty right gap.
    pub fn right_on_screen_inset(&self, content_width: f32) -> f32 {
        let headroom = content_width + 2.0 * self.inset - self.offset_x - self.visible_width;
        (self.inset - headroom).max(0.0)
    }
}
