//! Cooperative cancellation for the scan.
//!
//! A [`CancelToken`] is a cloneable flag plus an optional deadline. Workers
//! poll it once per record step; the coordinator polls it while waiting for
//! worker outcomes. Typical wiring: the CLI creates one token with the
//! `--max-run-time-secs` deadline and cancels it from the Ctrl+C handler.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::ScanError;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that never fires on its own; only [`cancel`](Self::cancel) trips it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also fires once `max_run_time` has elapsed.
    pub fn with_deadline(max_run_time: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + max_run_time),
        }
    }

    /// Request cancellation. Safe to call from any thread (e.g. a signal handler).
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop_reason().is_some()
    }

    /// Why the scan should stop, if it should. An explicit [`cancel`](Self::cancel)
    /// takes precedence over an expired deadline.
    pub fn stop_reason(&self) -> Option<ScanError> {
        if self.flag.load(Ordering::Relaxed) {
            return Some(ScanError::Cancelled);
        }
        match self.deadline {
            Some(d) if Instant::now() >= d => Some(ScanError::DeadlineExceeded),
            _ => None,
        }
    }
}
