//! Scan error taxonomy.
//!
//! Fatal variants (`Open`, `InvalidHeader`, `Read`, `MalformedLine`,
//! `MalformedField`, `WorkerPanicked`) abort the whole scan; the first one
//! observed by the coordinator wins and later ones are dropped.
//! `Cancelled` and `DeadlineExceeded` are expected terminations driven by the
//! caller's [`CancelToken`](crate::cancel::CancelToken), not defects.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The dataset file could not be opened or its header could not be read.
    #[error("open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The header row does not have exactly the expected column count.
    #[error("invalid header: expected {expected} columns, got {found}")]
    InvalidHeader { expected: usize, found: usize },

    /// An underlying read fault while iterating data lines.
    #[error("read dataset: {0}")]
    Read(#[from] std::io::Error),

    /// A data line does not split into the expected column count.
    #[error("malformed line: expected {expected} fields, got {found}")]
    MalformedLine { expected: usize, found: usize },

    /// A numeric cell is neither the `\N` sentinel nor a valid integer.
    #[error("malformed {field} field: {value:?} is not an integer or \\N")]
    MalformedField { field: &'static str, value: String },

    /// The scan was cancelled through the cancellation token.
    #[error("scan cancelled")]
    Cancelled,

    /// The cancellation token's deadline passed before the scan finished.
    #[error("scan deadline exceeded")]
    DeadlineExceeded,

    /// A shard worker exited without reporting an outcome.
    #[error("shard worker panicked")]
    WorkerPanicked,
}

impl ScanError {
    /// True for `Cancelled` and `DeadlineExceeded`: the caller asked the scan
    /// to stop, so this is a normal outcome rather than a scan defect.
    pub fn is_voluntary_stop(&self) -> bool {
        matches!(self, ScanError::Cancelled | ScanError::DeadlineExceeded)
    }
}
