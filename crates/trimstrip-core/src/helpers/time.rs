// crates/trimstrip-core/src/helpers/time.rs
//
// Time formatting for the handle labels. Canonical source; hosts rendering
// their own labels should use these rather than re-deriving the format.

/// Compact label for a handle time, seconds-only under a minute.
///
/// | Range    | Format    | Example  |
/// |----------|-----------|----------|
/// | < 60 s   | `Ns`      | `42s`    |
/// | ≥ 60 s   | `Nm Ns`   | `1m 5s`  |
///
/// ```
/// use trimstrip_core::helpers::time::format_handle_time;
/// assert_eq!(format_handle_time(0.0),  "0s");
/// assert_eq!(format_handle_time(42.4), "42s");
/// assert_eq!(format_handle_time(65.0), "1m 5s");
/// ```
pub fn format_handle_time(secs: f64) -> String {
    let whole = secs.max(0.0).round() as u64;
    if whole < 60 {
        format!("{whole}s")
    } else {
        format!("{}m {}s", whole / 60, whole % 60)
    }
}
