// crates/trimstrip-core/src/axis.rs
//
// Time ↔ pixel equivalence for the thumbnail strip.
//
// Positions are in content space: 0 is the first content pixel, content_width
// the last. On-screen x = horizontal_inset + position − scroll offset; that
// conversion lives in trimmer.rs so these two functions stay pure math.
//
// Both directions return None when duration or content_width is degenerate;
// callers treat that as "no mapping yet" and leave prior state untouched.

/// Content-space pixel position of `time` on a strip of `content_width` px.
///
/// `time` is clamped into `[0, duration]` before mapping, so any input
/// produces a position inside `[inset, inset + content_width]`.
///
/// ```
/// use trimstrip_core::axis::position_from_time;
/// assert_eq!(position_from_time(30.0, 60.0, 600.0, 0.0), Some(300.0));
/// assert_eq!(position_from_time(30.0, 0.0, 600.0, 0.0), None);
/// ```
pub fn position_from_time(time: f64, duration: f64, content_width: f32, inset: f32) -> Option<f32> {
    if duration <= 0.0 || content_width <= 0.0 {
        return None;
    }
    let ratio = (time / duration).clamp(0.0, 1.0);
    Some(inset + ratio as f32 * content_width)
}

/// Time equivalent of content-space pixel position `position`.
///
/// The pixel is clamped into `[inset, inset + content_width]` first, so the
/// result is always inside `[0, duration]`.
pub fn time_from_position(position: f32, duration: f64, content_width: f32, inset: f32) -> Option<f64> {
    if duration <= 0.0 || content_width <= 0.0 {
        return None;
    }
    let ratio = (f64::from(position - inset) / f64::from(content_width)).clamp(0.0, 1.0);
    Some(duration * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    #[test]
    fn round_trip_across_the_asset() {
        let duration = 127.3;
        let cw = 843.0;
        for i in 0..=100 {
            let t = duration * f64::from(i) / 100.0;
            let px = position_from_time(t, duration, cw, 15.0).unwrap();
            let back = time_from_position(px, duration, cw, 15.0).unwrap();
            assert!((back - t).abs() < EPS, "t={t} came back as {back}");
        }
    }

    #[test]
    fn position_is_monotonic_in_time() {
        let mut last = f32::NEG_INFINITY;
        for i in 0..=50 {
            let t = 60.0 * f64::from(i) / 50.0;
            let px = position_from_time(t, 60.0, 512.0, 0.0).unwrap();
            assert!(px >= last);
            last = px;
        }
    }

    #[test]
    fn out_of_range_times_clamp_to_edges() {
        assert_eq!(position_from_time(-5.0, 60.0, 600.0, 10.0), Some(10.0));
        assert_eq!(position_from_time(90.0, 60.0, 600.0, 10.0), Some(610.0));
        assert_eq!(time_from_position(-100.0, 60.0, 600.0, 0.0), Some(0.0));
        assert_eq!(time_from_position(9999.0, 60.0, 600.0, 0.0), Some(60.0));
    }

    #[test]
    fn degenerate_inputs_have_no_mapping() {
        assert_eq!(position_from_time(5.0, 0.0, 600.0, 0.0), None);
        assert_eq!(position_from_time(5.0, -1.0, 600.0, 0.0), None);
        assert_eq!(position_from_time(5.0, 60.0, 0.0, 0.0), None);
        assert_eq!(time_from_position(5.0, 60.0, -3.0, 0.0), None);
        assert_eq!(time_from_position(5.0, 0.0, 600.0, 0.0), None);
    }

    #[test]
    fn inset_shifts_positions_not_times() {
        let a = position_from_time(30.0, 60.0, 600.0, 0.0).unwrap();
        let b = position_from_time(30.0, 60.0, 600.0, 15.0).unwrap();
        assert_eq!(b - a, 15.0);
        let t = time_from_position(315.0, 60.0, 600.0, 15.0).unwrap();
        assert!((t - 30.0).abs() < EPS);
    }
}
