// crates/trimstrip-core/src/trimmer.rs
//
// TrimStrip ties the leaf components together: one bound asset, one tile
// layout, one viewport, two handles, one playhead, and the drag state
// machine the host's gesture recognizers feed.
//
// Event flow per interaction:
//   host input → mutate → queue StripEvents + ThumbnailRequests
//   host drains events (redraw, forward times to the player) and ships
//   requests to the worker; results come back through apply_thumbnail.
//
// The ordering rule that keeps zoom exact: configuration changes re-derive
// pixel constants from stored times (handles.rescale), never times from
// pixels. Pixels are only converted to time at the moment a drag commits a
// new position.

use uuid::Uuid;

use crate::axis;
use crate::config::StripConfig;
use crate::events::{DragTarget, StripEvent};
use crate::handles::{HandleSide, HandleSolver};
use crate::media_types::{ThumbnailRequest, ThumbnailResult, TileTag};
use crate::playhead::{PlayheadBounds, PositionTracker};
use crate::tiles::{LayoutParams, Relayout, Tile, TileStrip};
use crate::viewport::Viewport;

/// The asset currently shown in the strip. Duration and aspect ratio are
/// fixed until the next bind.
#[derive(Clone, Copy, Debug)]
pub struct Asset {
    pub id:           Uuid,
    pub duration:     f64,
    pub aspect_ratio: f32,
}

/// `Idle → Dragging(target) → Idle`. A drag captures the dragged thing's
/// pixel constant and the scroll offset at gesture-begin; updates carry the
/// cumulative translation since then, so auto-scroll under the gesture
/// shifts the committed base rather than fighting the finger.
#[derive(Clone, Copy)]
enum DragState {
    Idle,
    Dragging {
        target:       DragTarget,
        committed_px: f32,
        begin_offset: f32,
    },
}

pub struct TrimStrip {
    config:     StripConfig,
    asset:      Option<Asset>,
    zoom:       f32,
    viewport_h: f32,
    strip:      TileStrip,
    viewport:   Viewport,
    handles:    HandleSolver,
    playhead:   PositionTracker,
    drag:       DragState,
    events:     Vec<StripEvent>,
    requests:   Vec<ThumbnailRequest>,
}

impl TrimStrip {
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            asset:      None,
            zoom:       config.min_zoom,
            viewport_h: 0.0,
            strip:      TileStrip::new(),
            viewport:   Viewport::new(0.0, config.horizontal_inset),
            handles:    HandleSolver::new(config.min_duration, config.max_duration),
            playhead:   PositionTracker::new(),
            drag:       DragState::Idle,
            events:     Vec::new(),
            requests:   Vec::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &StripConfig { &self.config }
    pub fn asset(&self) -> Option<&Asset> { self.asset.as_ref() }
    pub fn zoom(&self) -> f32 { self.zoom }
    pub fn start_time(&self) -> f64 { self.handles.start_time() }
    pub fn end_time(&self) -> f64 { self.handles.end_time() }
    pub fn playhead_time(&self) -> f64 { self.playhead.time() }
    pub fn content_width(&self) -> f32 { self.strip.content_width() }
    pub fn generation(&self) -> u64 { self.strip.generation() }
    pub fn tiles(&self) -> &[Tile] { self.strip.tiles() }
    pub fn offset_x(&self) -> f32 { self.viewport.offset_x() }
    pub fn left_on_screen_inset(&self) -> f32 { self.viewport.left_on_screen_inset() }

    pub fn right_on_screen_inset(&self) -> f32 {
        self.viewport.right_on_screen_inset(self.strip.content_width())
    }

    /// Thumbnail currently shown in tile `index`, if delivered.
    pub fn tile_image(&self, index: usize) -> Option<&crate::media_types::Thumbnail> {
        self.strip.slot(index)
    }

    /// Viewport-space x of the selection's left edge. The left handle body
    /// is drawn in `[x − handle_width, x]`.
    pub fn left_handle_screen_x(&self) -> f32 {
        self.to_screen(self.handles.left_px())
    }

    /// Viewport-space x of the selection's right edge; the right handle body
    /// occupies `[x, x + handle_width]`.
    pub fn right_handle_screen_x(&self) -> f32 {
        self.to_screen(self.handles.right_px())
    }

    /// Total widget width including the two handle bodies flanking the strip.
    pub fn full_width(&self) -> f32 {
        self.strip.content_width() + 2.0 * self.config.handle_width
    }

    pub fn playhead_screen_x(&self) -> f32 {
        self.to_screen(self.playhead.px())
    }

    fn to_screen(&self, content_px: f32) -> f32 {
        self.viewport.inset() + content_px - self.viewport.offset_x()
    }

    // ── Host-driven queues ───────────────────────────────────────────────────

    /// Requests owed to the thumbnail worker since the last call.
    pub fn take_thumbnail_requests(&mut self) -> Vec<ThumbnailRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Events produced since the last call, in emission order.
    pub fn drain_events(&mut self) -> Vec<StripEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Configuration ────────────────────────────────────────────────────────

    /// Show a new asset. Resets the selection to `[0, min(duration,
    /// max_duration)]`, parks the playhead at the start and relays out.
    pub fn bind_asset(&mut self, id: Uuid, duration: f64, aspect_ratio: f32) {
        self.asset = Some(Asset { id, duration, aspect_ratio });
        self.drag = DragState::Idle;
        self.handles.bind(duration);
        self.relayout();
        let cw = self.strip.content_width();
        self.playhead.seek(0.0, self.playhead_bounds(), duration, cw);
    }

    /// Change the zoom factor (clamped to the configured minimum). The
    /// selected time range is untouched; only pixel constants move.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }
        let zoom = zoom.max(self.config.min_zoom);
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        self.relayout();
    }

    /// New viewport size (visible width × tile height).
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.set_visible_width(width);
        self.viewport_h = height;
        self.relayout();
    }

    pub fn set_horizontal_inset(&mut self, inset: f32) {
        self.config.horizontal_inset = inset.max(0.0);
        self.viewport.set_inset(self.config.horizontal_inset);
        if self.viewport.set_offset(self.viewport.offset_x(), self.strip.content_width()) {
            self.events.push(StripEvent::OffsetChanged { offset_x: self.viewport.offset_x() });
        }
    }

    pub fn set_duration_limits(&mut self, min_duration: f64, max_duration: f64) {
        self.config.min_duration = min_duration.max(0.0);
        self.config.max_duration = max_duration.max(self.config.min_duration);
        self.handles.set_duration_limits(self.config.min_duration, self.config.max_duration);
    }

    pub fn set_max_onscreen_duration(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.config.max_onscreen_duration = seconds;
            self.relayout();
        }
    }

    // ── Selection & playhead (programmatic) ──────────────────────────────────

    /// Set the selection in time directly (clamped, never inverted). Used by
    /// hosts restoring a selection; emits nothing.
    pub fn set_selection(&mut self, start: f64, end: f64) {
        let Some(asset) = self.asset else { return };
        self.handles.set_range(start, end, asset.duration);
        self.sync_derived(asset);
    }

    /// Move the playhead to `time`, clamped into the handle span. Emits
    /// nothing; the host asked, the host knows.
    pub fn seek(&mut self, time: f64) {
        let Some(asset) = self.asset else { return };
        let cw = self.strip.content_width();
        self.playhead.seek(time, self.playhead_bounds(), asset.duration, cw);
    }

    /// Scroll the strip (user pan on the content, not a handle drag).
    pub fn scroll_by(&mut self, dx: f32) {
        if self.viewport.scroll_by(dx, self.strip.content_width()) {
            self.events.push(StripEvent::OffsetChanged { offset_x: self.viewport.offset_x() });
        }
    }

    // ── Drag state machine ───────────────────────────────────────────────────

    /// Gesture began on `target`. Captures the committed pixel constant the
    /// whole gesture is measured from.
    pub fn begin_drag(&mut self, target: DragTarget) {
        if self.asset.is_none() {
            return;
        }
        let committed_px = match target {
            DragTarget::Handle(HandleSide::Left) => self.handles.left_px(),
            DragTarget::Handle(HandleSide::Right) => self.handles.right_px(),
            DragTarget::Playhead => self.playhead.px(),
        };
        self.drag = DragState::Dragging {
            target,
            committed_px,
            begin_offset: self.viewport.offset_x(),
        };
    }

    /// Gesture moved; `delta` is the cumulative translation since
    /// `begin_drag`. Recomputes the dragged constant, commits the new time,
    /// emits a changing event and nudges auto-scroll.
    pub fn update_drag(&mut self, delta: f32) {
        let DragState::Dragging { target, committed_px, begin_offset } = self.drag else {
            return;
        };
        let Some(asset) = self.asset else { return };
        if !delta.is_finite() {
            return;
        }
        let cw = self.strip.content_width();
        // Auto-scroll slides the content under the stationary finger: fold
        // the offset movement since gesture-begin into the committed base.
        let committed = committed_px + (self.viewport.offset_x() - begin_offset);

        match target {
            DragTarget::Handle(side) => {
                let px = match side {
                    HandleSide::Left => self.handles.drag_left(committed, delta, cw, asset.duration),
                    HandleSide::Right => self.handles.drag_right(committed, delta, cw, asset.duration),
                };
                if let Some(t) = axis::time_from_position(px, asset.duration, cw, 0.0) {
                    match side {
                        HandleSide::Left => {
                            self.handles.set_range(t, self.handles.end_time(), asset.duration)
                        }
                        HandleSide::Right => {
                            self.handles.set_range(self.handles.start_time(), t, asset.duration)
                        }
                    }
                    self.sync_derived(asset);
                    // The scrub preview tracks the in-point while trimming.
                    self.playhead
                        .seek(self.handles.start_time(), self.playhead_bounds(), asset.duration, cw);
                }
                self.events.push(StripEvent::RangeChanging {
                    start: self.handles.start_time(),
                    end:   self.handles.end_time(),
                    side,
                });
                self.auto_scroll_for(px, cw);
            }
            DragTarget::Playhead => {
                let time = self.playhead.time_from_drag(
                    committed,
                    delta,
                    self.playhead_bounds(),
                    asset.duration,
                    cw,
                );
                self.events.push(StripEvent::PlayheadChanging { time });
            }
        }
    }

    /// Gesture ended or was cancelled; either way the last committed
    /// constants stand and a settled event reports where.
    pub fn end_drag(&mut self) {
        match self.drag {
            DragState::Idle => {}
            DragState::Dragging { target: DragTarget::Handle(side), .. } => {
                // The scrub preview follows the in-point once trimming ends.
                if let Some(asset) = self.asset {
                    let cw = self.strip.content_width();
                    self.playhead
                        .seek(self.handles.start_time(), self.playhead_bounds(), asset.duration, cw);
                }
                self.events.push(StripEvent::RangeSettled {
                    start: self.handles.start_time(),
                    end:   self.handles.end_time(),
                    side,
                });
            }
            DragState::Dragging { target: DragTarget::Playhead, .. } => {
                self.events.push(StripEvent::PlayheadSettled { time: self.playhead.time() });
            }
        }
        self.drag = DragState::Idle;
    }

    /// Same semantics as [`end_drag`](Self::end_drag): a cancelled gesture
    /// settles where it is, nothing is restored.
    pub fn cancel_drag(&mut self) {
        self.end_drag();
    }

    // ── Thumbnails ───────────────────────────────────────────────────────────

    /// Apply a delivered thumbnail. Discards results for an unbound asset,
    /// a superseded generation or a reassigned slot. Returns true when the
    /// image landed.
    pub fn apply_thumbnail(&mut self, result: ThumbnailResult) -> bool {
        match self.asset {
            Some(asset) if asset.id == result.asset => self.strip.apply(result.tag, result.image),
            _ => false,
        }
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn playhead_bounds(&self) -> PlayheadBounds {
        PlayheadBounds {
            left_px:  self.handles.left_px(),
            right_px: self.handles.right_px(),
        }
    }

    /// Re-derive every pixel constant from stored times.
    fn sync_derived(&mut self, asset: Asset) {
        let cw = self.strip.content_width();
        self.handles.rescale(cw, asset.duration);
        self.playhead.rescale(self.playhead_bounds(), asset.duration, cw);
    }

    fn auto_scroll_for(&mut self, content_px: f32, content_width: f32) {
        let on_screen = self.to_screen(content_px);
        if self.viewport.auto_scroll(
            on_screen,
            self.config.auto_scroll_threshold,
            self.config.auto_scroll_step,
            content_width,
        ) {
            self.events.push(StripEvent::OffsetChanged { offset_x: self.viewport.offset_x() });
        }
    }

    /// Recompute tile layout for the current inputs. On a change: rescale
    /// the scroll offset proportionally so the same content region stays in
    /// view, re-derive all pixel constants from times, queue one thumbnail
    /// request per tile and a LayoutChanged event.
    fn relayout(&mut self) {
        let Some(asset) = self.asset else { return };
        let old_cw = self.strip.content_width();
        let params = LayoutParams {
            duration:              asset.duration,
            aspect_ratio:          asset.aspect_ratio,
            zoom:                  self.zoom,
            viewport_width:        self.viewport.visible_width(),
            viewport_height:       self.viewport_h,
            max_onscreen_duration: self.config.max_onscreen_duration,
        };
        if self.strip.recompute(params) != Relayout::Changed {
            return;
        }

        let cw = self.strip.content_width();
        let target_offset = if old_cw > 0.0 {
            self.viewport.offset_x() * (cw / old_cw)
        } else {
            self.viewport.offset_x()
        };
        if self.viewport.set_offset(target_offset, cw) {
            self.events.push(StripEvent::OffsetChanged { offset_x: self.viewport.offset_x() });
        }

        self.sync_derived(asset);

        let generation = self.strip.generation();
        self.requests.extend(self.strip.tiles().iter().map(|tile| ThumbnailRequest {
            asset: asset.id,
            tag:   TileTag { generation, index: tile.index },
            time:  tile.start_time,
        }));
        self.events.push(StripEvent::LayoutChanged {
            tile_count:  self.strip.tile_count(),
            tile_width:  self.strip.tile_width(),
            tile_height: self.strip.tile_height(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_types::Thumbnail;

    const EPS: f64 = 1e-4;

    /// 120 s asset on a 300×64 viewport, square tiles, 3–15 s selection.
    fn strip_120s() -> TrimStrip {
        let mut ts = TrimStrip::new(StripConfig::default());
        ts.set_viewport_size(300.0, 64.0);
        ts.bind_asset(Uuid::new_v4(), 120.0, 1.0);
        ts.drain_events();
        ts.take_thumbnail_requests();
        ts
    }

    fn rgba() -> Thumbnail {
        Thumbnail { width: 2, height: 2, data: vec![0u8; 16] }
    }

    #[test]
    fn initial_selection_is_capped_at_max_duration() {
        let ts = strip_120s();
        assert_eq!(ts.start_time(), 0.0);
        assert_eq!(ts.end_time(), 15.0);
        assert_eq!(ts.playhead_time(), 0.0);
    }

    #[test]
    fn dragging_right_handle_500px_cannot_exceed_max_duration() {
        let mut ts = strip_120s();
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        ts.update_drag(500.0);
        ts.end_drag();
        assert!(ts.end_time() - ts.start_time() <= 15.0 + EPS);
        assert!((ts.end_time() - 15.0).abs() < EPS);
    }

    #[test]
    fn selection_duration_stays_within_limits_across_a_drag_sequence() {
        let mut ts = strip_120s();
        for (target, deltas) in [
            (DragTarget::Handle(HandleSide::Right), [300.0, -700.0, 120.0, -40.0]),
            (DragTarget::Handle(HandleSide::Left), [-80.0, 250.0, -10.0, 55.0]),
        ] {
            ts.begin_drag(target);
            for d in deltas {
                ts.update_drag(d);
                let span = ts.end_time() - ts.start_time();
                assert!(span >= 3.0 - EPS, "span {span} below min");
                assert!(span <= 15.0 + EPS, "span {span} above max");
                assert!(ts.start_time() >= -EPS && ts.end_time() <= 120.0 + EPS);
            }
            ts.end_drag();
        }
    }

    #[test]
    fn zoom_change_preserves_the_selected_times_exactly() {
        let mut ts = TrimStrip::new(StripConfig {
            min_duration: 1.0,
            max_duration: 60.0,
            ..StripConfig::default()
        });
        ts.set_viewport_size(300.0, 64.0);
        ts.bind_asset(Uuid::new_v4(), 60.0, 1.0);
        ts.set_selection(10.0, 20.0);

        // zoom 1: cw 300, selection at 50..100 px (offset 0, inset 15).
        assert!((ts.left_handle_screen_x() - 65.0).abs() < 1e-3);
        assert!((ts.right_handle_screen_x() - 115.0).abs() < 1e-3);
        ts.set_zoom(3.0);

        assert_eq!((ts.start_time(), ts.end_time()), (10.0, 20.0));
        assert!((ts.content_width() - 900.0).abs() < 1e-3);
        // Pixel constants scale with the content width: 150..300 px.
        let left_px = ts.left_handle_screen_x() - ts.left_on_screen_inset() + ts.offset_x();
        let right_px = ts.right_handle_screen_x() - ts.left_on_screen_inset() + ts.offset_x();
        assert!((left_px - 150.0).abs() < 1e-3);
        assert!((right_px - 300.0).abs() < 1e-3);
    }

    #[test]
    fn repeated_zoom_changes_never_move_the_selection() {
        let mut ts = strip_120s();
        ts.set_selection(30.0, 40.0);
        for z in [2.0, 5.0, 1.5, 3.25, 1.0] {
            ts.set_zoom(z);
            assert_eq!((ts.start_time(), ts.end_time()), (30.0, 40.0));
        }
    }

    #[test]
    fn relayout_queues_one_request_per_tile_once() {
        let mut ts = TrimStrip::new(StripConfig::default());
        ts.set_viewport_size(300.0, 64.0);
        ts.bind_asset(Uuid::new_v4(), 120.0, 1.0);
        let reqs = ts.take_thumbnail_requests();
        assert_eq!(reqs.len(), ts.tiles().len());
        let gen = ts.generation();
        for (i, r) in reqs.iter().enumerate() {
            assert_eq!(r.tag, TileTag { generation: gen, index: i });
            assert!((r.time - ts.tiles()[i].start_time).abs() < 1e-9);
        }
        // Unchanged inputs: no regeneration, no fresh requests.
        ts.set_viewport_size(300.0, 64.0);
        assert!(ts.take_thumbnail_requests().is_empty());
        assert_eq!(ts.generation(), gen);
    }

    #[test]
    fn stale_generation_thumbnail_is_discarded_after_relayout() {
        let mut ts = strip_120s();
        let stale = ThumbnailRequest {
            asset: ts.asset().unwrap().id,
            tag:   TileTag { generation: ts.generation(), index: 4 },
            time:  0.0,
        };
        ts.set_zoom(2.0); // generation bump
        let applied = ts.apply_thumbnail(ThumbnailResult {
            asset: stale.asset,
            tag:   stale.tag,
            image: Some(rgba()),
        });
        assert!(!applied);
        assert!(ts.tile_image(4).is_none());
        // The new generation's own result still lands in that slot.
        assert!(ts.apply_thumbnail(ThumbnailResult {
            asset: stale.asset,
            tag:   TileTag { generation: ts.generation(), index: 4 },
            image: Some(rgba()),
        }));
    }

    #[test]
    fn thumbnail_for_a_previous_asset_is_discarded() {
        let mut ts = strip_120s();
        let old = ts.asset().unwrap().id;
        let tag = TileTag { generation: ts.generation(), index: 0 };
        ts.bind_asset(Uuid::new_v4(), 90.0, 1.0);
        assert!(!ts.apply_thumbnail(ThumbnailResult { asset: old, tag, image: Some(rgba()) }));
    }

    #[test]
    fn handle_drag_emits_changing_then_settled() {
        let mut ts = strip_120s();
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        ts.update_drag(-10.0);
        ts.update_drag(-20.0);
        ts.end_drag();
        let events = ts.drain_events();
        let changing = events
            .iter()
            .filter(|e| matches!(e, StripEvent::RangeChanging { side: HandleSide::Right, .. }))
            .count();
        assert_eq!(changing, 2);
        match events.last() {
            Some(StripEvent::RangeSettled { start, end, side }) => {
                assert_eq!(*side, HandleSide::Right);
                assert!((end - start) <= 15.0 + EPS);
            }
            other => panic!("expected RangeSettled last, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_drag_settles_where_it_is() {
        let mut ts = strip_120s();
        let before = ts.end_time();
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        ts.update_drag(-12.0);
        let moved = ts.end_time();
        assert!(moved < before);
        ts.cancel_drag();
        assert_eq!(ts.end_time(), moved);
        assert!(matches!(
            ts.drain_events().last(),
            Some(StripEvent::RangeSettled { .. })
        ));
    }

    #[test]
    fn playhead_is_pinned_to_start_while_trimming() {
        let mut ts = strip_120s();
        // Scrub mid-selection first, then trim: the preview must snap to
        // the in-point on every drag update, not only when the gesture ends.
        ts.seek(10.0);
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        ts.update_drag(-10.0);
        assert!((ts.playhead_time() - ts.start_time()).abs() < 1e-3);
        ts.end_drag();

        ts.begin_drag(DragTarget::Handle(HandleSide::Left));
        ts.update_drag(20.0);
        assert!(ts.start_time() > 0.0);
        assert!(
            (ts.playhead_time() - ts.start_time()).abs() < 1e-3,
            "playhead must follow the moving in-point mid-drag"
        );
        ts.end_drag();
        assert!((ts.playhead_time() - ts.start_time()).abs() < 1e-3);
    }

    #[test]
    fn playhead_drag_emits_changing_then_settled() {
        let mut ts = strip_120s();
        ts.begin_drag(DragTarget::Playhead);
        ts.update_drag(10.0);
        ts.end_drag();
        let events = ts.drain_events();
        assert!(matches!(events.first(), Some(StripEvent::PlayheadChanging { .. })));
        match events.last() {
            Some(StripEvent::PlayheadSettled { time }) => {
                assert!(*time >= ts.start_time() && *time <= ts.end_time());
            }
            other => panic!("expected PlayheadSettled last, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_drag_deltas_change_nothing() {
        let mut ts = strip_120s();
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        ts.update_drag(f32::NAN);
        ts.update_drag(f32::NEG_INFINITY);
        assert_eq!(ts.end_time(), 15.0);
        assert!(ts.drain_events().is_empty());
    }

    #[test]
    fn auto_scroll_nudges_once_per_update_during_an_edge_drag() {
        // Duration cap wide enough that the right handle reaches the far end
        // of a zoomed (scrollable) strip.
        let mut ts = TrimStrip::new(StripConfig {
            max_duration: 120.0,
            ..StripConfig::default()
        });
        ts.set_viewport_size(300.0, 64.0);
        ts.bind_asset(Uuid::new_v4(), 120.0, 1.0);
        ts.set_zoom(4.0); // cw 1200, right handle at 1200 px; way off screen
        ts.drain_events();

        // The handle sits past the right viewport edge, so every drag update
        // nudges the offset by exactly one step.
        let step = ts.config().auto_scroll_step;
        ts.begin_drag(DragTarget::Handle(HandleSide::Right));
        let offsets: Vec<f32> = (0..4)
            .map(|i| {
                ts.update_drag(-(10.0 + i as f32));
                ts.offset_x()
            })
            .collect();
        assert_eq!(offsets[0], step);
        for pair in offsets.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-3);
        }
        assert!(ts
            .drain_events()
            .iter()
            .any(|e| matches!(e, StripEvent::OffsetChanged { .. })));
    }

    #[test]
    fn auto_scroll_never_fires_when_content_fits_the_viewport() {
        let mut ts = strip_120s(); // cw 300 == viewport 300
        ts.begin_drag(DragTarget::Handle(HandleSide::Left));
        ts.update_drag(5.0);
        ts.update_drag(-5.0);
        assert_eq!(ts.offset_x(), 0.0);
        assert!(!ts
            .drain_events()
            .iter()
            .any(|e| matches!(e, StripEvent::OffsetChanged { .. })));
    }

    #[test]
    fn scroll_emits_offset_changed_and_shifts_screen_positions_only() {
        let mut ts = strip_120s();
        ts.set_zoom(4.0);
        ts.drain_events();
        let (start, end) = (ts.start_time(), ts.end_time());
        let screen_before = ts.left_handle_screen_x();
        ts.scroll_by(100.0);
        assert_eq!((ts.start_time(), ts.end_time()), (start, end));
        assert_eq!(ts.left_handle_screen_x(), screen_before - 100.0);
        assert!(matches!(
            ts.drain_events().as_slice(),
            [StripEvent::OffsetChanged { .. }]
        ));
    }

    #[test]
    fn zoom_below_minimum_is_clamped() {
        let mut ts = strip_120s();
        ts.set_zoom(0.25);
        assert_eq!(ts.zoom(), ts.config().min_zoom);
    }
}
