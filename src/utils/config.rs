//! Application configuration constants.
//! Tuning values in one place.

use std::time::Duration;

// ---- Scan coordination ----

/// How often the coordinator re-checks the cancellation token while waiting
/// for worker outcomes. Also bounds how long a finished scan can linger after
/// cancellation fires.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(25);

// ---- CLI defaults ----

/// Default worker count for the file scan.
pub const DEFAULT_WORKERS: usize = 4;

/// Default maximum run time before the scan is cancelled (seconds).
pub const DEFAULT_MAX_RUN_TIME_SECS: u64 = 60;
