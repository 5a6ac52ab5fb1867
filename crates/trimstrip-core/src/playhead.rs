// crates/trimstrip-core/src/playhead.rs
//
// Scrub position within the selected range. Same times-are-authoritative
// rule as the handles: the pixel constant is re-derived from the time on
// every seek and relayout, bounded by the current handle span.
//
// Bounds are the handles' content-space constants, which are the selection
// edges themselves; the drawn handle bodies sit outside them, so no
// handle-width correction is needed here (that offset only exists in screen
// space, where the host lays the handles out).

use crate::axis;

pub struct PositionTracker {
    time: f64,
    /// Content-space pixel constant, derived from `time`.
    px:   f32,
}

/// The live handle span the playhead is confined to.
#[derive(Clone, Copy, Debug)]
pub struct PlayheadBounds {
    pub left_px:  f32,
    pub right_px: f32,
}

impl PlayheadBounds {
    fn clamp(&self, px: f32) -> f32 {
        // min() guards a momentarily inverted span during relayout churn.
        px.clamp(self.left_px.min(self.right_px), self.right_px)
    }
}

impl PositionTracker {
    pub fn new() -> Self {
        Self { time: 0.0, px: 0.0 }
    }

    pub fn time(&self) -> f64 { self.time }
    pub fn px(&self) -> f32 { self.px }

    /// Move the playhead to `time`, clamped into the handle span. Returns
    /// the new pixel constant. Re-seeking the same time under unchanged
    /// bounds yields the same constant.
    pub fn seek(&mut self, time: f64, bounds: PlayheadBounds, duration: f64, content_width: f32) -> f32 {
        let Some(raw) = axis::position_from_time(time, duration, content_width, 0.0) else {
            return self.px;
        };
        self.px = bounds.clamp(raw);
        self.time = axis::time_from_position(self.px, duration, content_width, 0.0).unwrap_or(time);
        self.px
    }

    /// Time under a playhead drag that started at `committed_px` and has
    /// moved `delta` pixels. Updates the stored time/constant and returns
    /// the new time. Non-finite deltas leave everything standing.
    pub fn time_from_drag(
        &mut self,
        committed_px: f32,
        delta: f32,
        bounds: PlayheadBounds,
        duration: f64,
        content_width: f32,
    ) -> f64 {
        if !delta.is_finite() {
            return self.time;
        }
        let px = bounds.clamp(committed_px + delta);
        if let Some(t) = axis::time_from_position(px, duration, content_width, 0.0) {
            self.px = px;
            self.time = t;
        }
        self.time
    }

    /// Re-derive the pixel constant after a relayout or handle move,
    /// keeping the time (further clamped into the new span).
    pub fn rescale(&mut self, bounds: PlayheadBounds, duration: f64, content_width: f32) {
        let time = self.time;
        self.seek(time, bounds, duration, content_width);
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}
