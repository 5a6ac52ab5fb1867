// crates/trimstrip-media/src/helpers/log.rs
//
// Unified logging for the worker crate.
//
// The worker runs inside GUI hosts that often have no console attached
// (double-click launch), where `eprintln!` output is silently discarded.
// All log calls go to a temp file instead so they're visible regardless of
// launch mode.
//
// File: $TMPDIR/trimstrip.log; append-only, created on first write.
//
// Usage:
//   use crate::helpers::log::tlog;
//   tlog("[worker] shutdown");
//
// Or use the macro for format string convenience:
//   trimstrip_log!("[worker] request queue full; dropping gen {gen} tile {idx}");

use std::io::Write;

/// Write `msg` to the trimstrip log file in the OS temp directory.
/// Never panics; failures are silently ignored (we're already in a fallback path).
pub fn tlog(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("trimstrip.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
}

/// Convenience macro; formats like `eprintln!` but routes through `tlog`.
#[macro_export]
macro_rules! trimstrip_log {
    ($($arg:tt)*) => {
        $crate::helpers::log::tlog(&format!($($arg)*))
    };
}
