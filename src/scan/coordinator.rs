//! Scan coordinator: launches shard workers and arbitrates their outcomes.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};
use log::debug;

use crate::cancel::CancelToken;
use crate::dataset::{Dataset, TsvCursor};
use crate::error::ScanError;
use crate::filters::FilterChain;
use crate::scan::shard::run_shard;
use crate::types::{ScanOptions, Title};
use crate::utils::config::CANCEL_POLL_INTERVAL;

/// One worker's final report: its id and either its match list or the error
/// that stopped it. Sent exactly once per worker.
type WorkerOutcome = (usize, Result<Vec<Title>, ScanError>);

/// Scan the dataset with `opts.workers` interleaved shard workers.
///
/// Each worker gets an independent read handle and a private match list;
/// outcomes come back over a channel sized for all workers, so no worker ever
/// blocks on reporting. The coordinator races three outcomes:
///
/// 1. a worker reports a fatal error — returned immediately, the remaining
///    workers are abandoned (they stop on their own cancellation poll or at
///    end of file, and their late reports are dropped);
/// 2. every worker completes or voluntarily stops — slots are concatenated in
///    worker-id order (NOT file order) and returned;
/// 3. the cancellation token fires first — `Cancelled`/`DeadlineExceeded` is
///    returned without waiting for the workers.
pub fn scan_titles(
    dataset: &Dataset,
    opts: &ScanOptions,
    filters: FilterChain,
    cancel: &CancelToken,
) -> Result<Vec<Title>, ScanError> {
    let workers = opts.effective_workers();
    let filters: Arc<FilterChain> = Arc::new(filters);
    let (outcome_tx, outcome_rx) = bounded::<WorkerOutcome>(workers);

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let cursor = dataset.reader()?;
        handles.push(spawn_shard_worker(
            cursor,
            worker,
            workers,
            Arc::clone(&filters),
            cancel.clone(),
            outcome_tx.clone(),
        ));
    }
    drop(outcome_tx);
    debug!("scanning {} with {} workers", dataset.path().display(), workers);

    // Slot per worker; filled as outcomes arrive, merged in worker-id order.
    let mut slots: Vec<Option<Vec<Title>>> = (0..workers).map(|_| None).collect();
    let mut remaining = workers;
    while remaining > 0 {
        if let Some(reason) = cancel.stop_reason() {
            return Err(reason);
        }
        match outcome_rx.recv_timeout(CANCEL_POLL_INTERVAL) {
            Ok((worker, Ok(matches))) => {
                slots[worker] = Some(matches);
                remaining -= 1;
            }
            Ok((_, Err(err))) => return Err(err),
            Err(RecvTimeoutError::Timeout) => continue,
            // A worker dropped its sender without reporting.
            Err(RecvTimeoutError::Disconnected) => return Err(ScanError::WorkerPanicked),
        }
    }

    for handle in handles {
        let _ = handle.join();
    }

    let mut out = Vec::new();
    for slot in slots {
        out.extend(slot.unwrap_or_default());
    }
    debug!("scan complete: {} matches", out.len());
    Ok(out)
}

/// Spawn one shard worker; it reports its outcome exactly once and ignores a
/// closed channel (the coordinator may already have returned an error).
fn spawn_shard_worker(
    cursor: TsvCursor,
    worker: usize,
    workers: usize,
    filters: Arc<FilterChain>,
    cancel: CancelToken,
    outcome_tx: Sender<WorkerOutcome>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let outcome = run_shard(cursor, worker, workers, &filters, &cancel);
        let _ = outcome_tx.send((worker, outcome));
    })
}
