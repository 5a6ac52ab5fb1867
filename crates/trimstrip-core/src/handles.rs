// crates/trimstrip-core/src/handles.rs
//
// Constraint solver for the two trim handles.
//
// Times are the source of truth; pixel constants are derived from them via
// the axis and re-derived after every relayout. A zoom or viewport-width
// change therefore cannot move the selection in time; only its pixels.
//
// All clamps are nested min/max, so whatever magnitude a drag delta has the
// resulting constant lands inside [0, content_width] with the handles in
// order and their distance inside the min/max-duration window whenever the
// window is feasible for the current asset.

use crate::axis;

/// Which handle a drag is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleSide {
    Left,
    Right,
}

pub struct HandleSolver {
    start_time:   f64,
    end_time:     f64,
    /// Content-space pixel constants, always derived from the times above.
    left_px:      f32,
    right_px:     f32,
    min_duration: f64,
    max_duration: f64,
}

impl HandleSolver {
    pub fn new(min_duration: f64, max_duration: f64) -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            left_px: 0.0,
            right_px: 0.0,
            min_duration,
            max_duration,
        }
    }

    pub fn start_time(&self) -> f64 { self.start_time }
    pub fn end_time(&self) -> f64 { self.end_time }
    pub fn left_px(&self) -> f32 { self.left_px }
    pub fn right_px(&self) -> f32 { self.right_px }

    pub fn set_duration_limits(&mut self, min_duration: f64, max_duration: f64) {
        self.min_duration = min_duration.max(0.0);
        self.max_duration = max_duration.max(self.min_duration);
    }

    /// Initial selection for a freshly bound asset: starts at 0, spans the
    /// whole asset up to the max-duration cap. Pixel constants follow on the
    /// first relayout's rescale.
    pub fn bind(&mut self, duration: f64) {
        self.start_time = 0.0;
        self.end_time = duration.clamp(0.0, self.max_duration);
        self.left_px = 0.0;
        self.right_px = 0.0;
    }

    /// Min-duration expressed in pixels against the current width/duration
    /// ratio. None while there is no time↔pixel mapping.
    pub fn minimum_distance(&self, content_width: f32, duration: f64) -> Option<f32> {
        if duration <= 0.0 {
            return None;
        }
        Some((self.min_duration * f64::from(content_width) / duration) as f32)
    }

    /// Max-duration counterpart of [`minimum_distance`](Self::minimum_distance).
    /// May exceed the content width, in which case it clamps nothing and the
    /// selection can span the whole asset.
    pub fn maximum_distance(&self, content_width: f32, duration: f64) -> Option<f32> {
        if duration <= 0.0 {
            return None;
        }
        Some((self.max_duration * f64::from(content_width) / duration) as f32)
    }

    /// New left-handle constant for a drag that started at `committed_px`
    /// and has moved `delta` pixels so far. Non-finite deltas leave the
    /// current constant standing.
    pub fn drag_left(&self, committed_px: f32, delta: f32, content_width: f32, duration: f64) -> f32 {
        if !delta.is_finite() {
            return self.left_px;
        }
        let (Some(min_d), Some(max_d)) = (
            self.minimum_distance(content_width, duration),
            self.maximum_distance(content_width, duration),
        ) else {
            return self.left_px;
        };
        let upper = (self.right_px - min_d).min(content_width).max(0.0);
        let mut px = (committed_px + delta).clamp(0.0, upper);
        // Dragging further left than max-duration allows pulls the handle
        // back to the widest legal range instead of growing past it.
        let floor = (self.right_px - max_d).clamp(0.0, upper);
        if px < floor {
            px = floor;
        }
        px
    }

    /// Mirror of [`drag_left`](Self::drag_left) for the right handle.
    pub fn drag_right(&self, committed_px: f32, delta: f32, content_width: f32, duration: f64) -> f32 {
        if !delta.is_finite() {
            return self.right_px;
        }
        let (Some(min_d), Some(max_d)) = (
            self.minimum_distance(content_width, duration),
            self.maximum_distance(content_width, duration),
        ) else {
            return self.right_px;
        };
        let lower = (self.left_px + min_d).clamp(0.0, content_width);
        let mut px = (committed_px + delta).clamp(lower, content_width);
        let cap = (self.left_px + max_d).clamp(lower, content_width);
        if px > cap {
            px = cap;
        }
        px
    }

    /// Commit a new selection in time. Input times are clamped to
    /// `0 ≤ start ≤ end ≤ duration`; pixel constants are not touched here;
    /// call [`rescale`](Self::rescale) (or let the trimmer's relayout do it)
    /// to re-derive them.
    pub fn set_range(&mut self, start: f64, end: f64, duration: f64) {
        let start = start.clamp(0.0, duration.max(0.0));
        let end = end.clamp(start, duration.max(0.0));
        self.start_time = start;
        self.end_time = end;
    }

    /// Re-derive both pixel constants from the stored times. This is the
    /// zoom-preserving step: after any relayout the selection's times are
    /// unchanged and only these constants move.
    pub fn rescale(&mut self, content_width: f32, duration: f64) {
        if let Some(px) = axis::position_from_time(self.start_time, duration, content_width, 0.0) {
            self.left_px = px;
        }
        if let Some(px) = axis::position_from_time(self.end_time, duration, content_width, 0.0) {
            self.right_px = px;
        }
    }
}
