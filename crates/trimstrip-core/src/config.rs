// crates/trimstrip-core/src/config.rs
// Host-set knobs for the trim strip. Pure data, serializable via serde so a
// host can persist its widget settings alongside project files.

use serde::{Deserialize, Serialize};

/// Configuration for a [`TrimStrip`](crate::trimmer::TrimStrip).
///
/// Durations are in seconds, everything else in pixels. Change the duration
/// limits before binding an asset; they are read when the initial selection
/// is placed and on every subsequent drag, but an already-wider selection is
/// not retroactively shrunk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StripConfig {
    /// Narrowest selectable range. Below this the handles stop panning.
    pub min_duration:          f64,
    /// Widest selectable range.
    pub max_duration:          f64,
    /// Asset length shown per viewport-width at zoom 1. Longer assets get a
    /// proportionally wider (scrollable) strip so tile count stays bounded.
    pub max_onscreen_duration: f64,
    /// Lower bound for the zoom factor (fully zoomed out).
    pub min_zoom:              f32,
    /// Scrollable padding on each side of the content.
    pub horizontal_inset:      f32,
    /// Width of each drag handle; the playhead never enters the handles.
    pub handle_width:          f32,
    /// Distance from a viewport edge at which a dragged handle starts
    /// nudging the scroll offset.
    pub auto_scroll_threshold: f32,
    /// Offset change applied per auto-scroll nudge (one per layout pass).
    pub auto_scroll_step:      f32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            min_duration:          3.0,
            max_duration:          15.0,
            max_onscreen_duration: 1800.0,
            min_zoom:              1.0,
            horizontal_inset:      15.0,
            handle_width:          20.0,
            auto_scroll_threshold: 35.0,
            auto_scroll_step:      25.0,
        }
    }
}
