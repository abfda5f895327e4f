//! Shard scanner: one worker's interleaved slice of the dataset.
//!
//! Worker `w` of `N` owns every `N`-th data line starting at the `(w+1)`-th
//! line of the file (line 0 is the header, skipped by every worker). The
//! worker advances its private cursor past its offset, then alternates one
//! per-record step with a skip of `N - 1` lines. The skip happens whether the
//! owned record matched or not, so each data line is processed by exactly one
//! worker regardless of filter outcomes.

use crate::cancel::CancelToken;
use crate::dataset::LineCursor;
use crate::decode::decode_title;
use crate::error::ScanError;
use crate::filters::{Filter, matches_all};
use crate::types::Title;

/// One per-record step: advance, decode, filter, maybe accumulate.
///
/// Returns `Ok(true)` when the cursor is cleanly exhausted (no record
/// produced), `Ok(false)` after processing one line — matched lines are
/// appended to `out`, rejected lines are simply dropped. Decode failures and
/// read faults are fatal.
pub fn scan_step<C: LineCursor>(
    cursor: &mut C,
    filters: &[Box<dyn Filter>],
    out: &mut Vec<Title>,
) -> Result<bool, ScanError> {
    if !cursor.advance()? {
        return Ok(true);
    }
    let title = decode_title(cursor.line())?;
    if matches_all(filters, &title) {
        out.push(title);
    }
    Ok(false)
}

/// Advance past `n` lines without decoding them. Returns `Ok(false)` when the
/// cursor ran out before all `n` lines were skipped.
fn skip_lines<C: LineCursor>(cursor: &mut C, n: usize) -> Result<bool, ScanError> {
    for _ in 0..n {
        if !cursor.advance()? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Run one shard to completion, voluntary stop, or first fatal error.
///
/// Cancellation is polled before every record step; a cancelled worker keeps
/// the matches it already accumulated and reports them as a normal outcome —
/// the coordinator decides whether the overall scan still counts as
/// cancelled.
pub fn run_shard<C: LineCursor>(
    mut cursor: C,
    worker: usize,
    workers: usize,
    filters: &[Box<dyn Filter>],
    cancel: &CancelToken,
) -> Result<Vec<Title>, ScanError> {
    let mut matches = Vec::new();

    // Header plus this worker's offset into the interleaving.
    if !skip_lines(&mut cursor, worker + 1)? {
        return Ok(matches);
    }

    loop {
        if cancel.is_cancelled() {
            break;
        }
        if scan_step(&mut cursor, filters, &mut matches)? {
            break;
        }
        if !skip_lines(&mut cursor, workers - 1)? {
            break;
        }
    }

    Ok(matches)
}
