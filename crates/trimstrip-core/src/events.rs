// crates/trimstrip-core/src/events.rs
//
// Every externally visible state change of the strip is expressed as a
// StripEvent. The trimmer queues these; the host drains the queue after each
// interaction and forwards times to its player / renderer. The core holds no
// listener references.

use crate::handles::HandleSide;

/// What a drag gesture is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Handle(HandleSide),
    Playhead,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StripEvent {
    /// A relayout produced a new tile set. One thumbnail request per tile
    /// is waiting in the trimmer's request queue.
    LayoutChanged {
        tile_count:  usize,
        tile_width:  f32,
        tile_height: f32,
    },
    /// The scroll offset moved (user scroll or drag auto-scroll).
    OffsetChanged { offset_x: f32 },
    /// A handle drag is in progress; fired on every gesture update.
    RangeChanging { start: f64, end: f64, side: HandleSide },
    /// A handle drag ended (or was cancelled; same thing: the selection
    /// settles where it is).
    RangeSettled { start: f64, end: f64, side: HandleSide },
    /// A playhead drag is in progress.
    PlayheadChanging { time: f64 },
    /// A playhead drag ended.
    PlayheadSettled { time: f64 },
}
